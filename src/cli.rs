// src/cli.rs
use std::{env, error::Error, io, path::PathBuf};

use crate::config::options::ExportFormat;
use crate::params::Params;
use crate::progress::StderrProgress;

#[derive(Debug)]
pub enum Command {
    Run(Params),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(params) => params,
    };

    let mut progress = StderrProgress::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = crate::runner::run(&params, &mut out, Some(&mut progress))?;
    for path in &summary.files_written {
        eprintln!("Wrote {} card(s) to {}", summary.cards_extracted, path.display());
    }
    Ok(())
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new();
    // Piped output usually feeds another tool; headers are opt-in here.
    params.options.export.include_headers = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "-i" | "--input" => params.options.source.snapshots.push(PathBuf::from(value(&a)?)),
            "--link-base" => params.options.source.link_base = value(&a)?,
            "--list-columns" => params.list_columns = true,
            "--columns" => {
                params.options.selected_columns = split_list(&value(&a)?);
                params.columns_given = true;
            }
            "--name" | "--client" | "--id" | "--tags" | "--effort" => {
                let v = value(&a)?;
                params.options.filters.set(&a[2..], &v);
            }
            "--last-filters" => params.last_filters = true,
            "--insights" => params.insights = true,
            "--assignee" => {
                let v = value(&a)?;
                params.assignees.get_or_insert_with(Vec::new).push(s!(v.trim()));
            }
            "-o" | "--out" => {
                let v = value(&a)?;
                params.options.export.set_path(&v);
                params.write_file = true;
            }
            "--format" => {
                let v = value(&a)?;
                params.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--include-headers" => params.options.export.include_headers = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    if params.insights && params.write_file {
        return Err("--insights prints to stdout; drop --out".into());
    }
    Ok(Command::Run(params))
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
