use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use svg_schedule::{build_blocks, load_path, RenderMode, RenderOptions, Timetable};
use tracing::info;

use crate::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let courses = load_path(&cli.input)
        .with_context(|| format!("cannot read course table '{}'", cli.input.display()))?;
    let table = build_blocks(&courses, cli.colors)
        .with_context(|| format!("cannot lay out '{}'", cli.input.display()))?;

    if cli.dump_blocks {
        return dump_blocks(&table);
    }

    let path = render_timetable(cli, &table)?;
    println!("Wrote {} timetable to {}", cli.mode, path.display());
    Ok(())
}

pub fn dump_blocks(table: &Timetable) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    println!("{}", json);
    Ok(())
}

pub fn render_timetable(cli: &Cli, table: &Timetable) -> anyhow::Result<PathBuf> {
    let options = RenderOptions {
        user: cli.user.clone(),
        theme: cli.theme.clone(),
        canvas: cli.size,
    };
    let document = cli.mode.render(table, &options);
    let path = output_path(&cli.input, cli.output.as_deref(), cli.mode);
    fs::write(&path, document)
        .with_context(|| format!("cannot write timetable to '{}'", path.display()))?;
    info!(
        path = %path.display(),
        mode = %cli.mode,
        courses = table.blocks.len(),
        "wrote timetable"
    );
    Ok(path)
}

fn output_path(input: &Path, output: Option<&Path>, mode: RenderMode) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(mode.extension()),
    }
}
