// Imports
use anyhow::Context;
use scenekit_engine::{SceneFile, SceneSnapshot};
use std::path::Path;

pub(crate) fn run_scene(scene_file: &Path, frames: u64) -> anyhow::Result<()> {
    let file = SceneFile::load_from_path(scene_file)?;
    let snapshot = run_file(file, frames)?;
    let json =
        serde_json::to_string_pretty(&snapshot).context("serializing the scene state failed")?;
    println!("{json}");
    Ok(())
}

pub(crate) fn run_file(file: SceneFile, frames: u64) -> anyhow::Result<SceneSnapshot> {
    let mut scene = file.into_scene().context("building the scene failed")?;
    let flags = scene.run(frames);
    tracing::debug!("Ran {frames} frames, flags: {flags:?}");
    Ok(scene.snapshot())
}
