// src/cli.rs
use std::{env, error::Error, fs, path::PathBuf};

use crate::config::consts::DEMO_ROWS;
use crate::config::options::{AppOptions, ExportFormat};
use crate::csv::TokenizeMode;
use crate::data::{Catalog, FilteredView};
use crate::deeplink::{find_anchor, DeepLink};
use crate::file;
use crate::filter::{MatchStrategy, TypeFilter};
use crate::render::{build_card, card_text};
use crate::specs::SchemaKind;

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub search: Option<String>,     // -q / --search
    pub type_filter: TypeFilter,    // --type
    pub link: Option<String>,       // --link <url>
    pub demo: bool,                 // built-in sample rows instead of a source
    pub list_columns: bool,         // print columns + bindings then exit
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        println!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    let out = execute(&params)?;
    match &params.options.export.out_path {
        // Tabular exports already went to the file.
        Some(path) if params.options.export.format == ExportFormat::Text => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    file::ensure_directory(parent)?;
                }
            }
            fs::write(path, out)?;
            eprintln!("Wrote {}", path.display());
        }
        _ => print!("{}", out),
    }
    Ok(())
}

pub fn load(params: &Params) -> Result<Catalog, Box<dyn Error>> {
    if params.demo {
        return Ok(Catalog::demo(DEMO_ROWS));
    }
    let load = &params.options.load;
    let text = file::read_source(&load.source)?;
    let cat = Catalog::load_text(&text, &load.source, load)?;
    for d in &cat.report().skipped {
        eprintln!("warning: {}", d);
    }
    Ok(cat)
}

/// Load, filter and render. Returns the text for stdout (CSV/TSV to a file
/// returns a one-line note instead).
pub fn execute(params: &Params) -> Result<String, Box<dyn Error>> {
    let cat = load(params)?;

    if params.list_columns {
        return Ok(columns_text(&cat));
    }

    let link = params.link.as_deref().map(DeepLink::parse).unwrap_or_default();
    let search = params
        .search
        .clone()
        .or(link.search.clone())
        .unwrap_or_default();

    // Demo rows are always read with the inferred layout.
    let strategy = params
        .options
        .load
        .strategy
        .unwrap_or_else(|| cat.spec().default_strategy());
    let mut view = cat.filter(&search, &params.type_filter, strategy);

    if let Some(frag) = &link.fragment {
        match find_anchor(&cat, &view, frag) {
            Some(pos) => view.rec_ix = vec![view.rec_ix[pos]],
            None => logw!("Deep link: no card for #{}", frag),
        }
    }

    let export = &params.options.export;
    match export.format {
        ExportFormat::Text => Ok(cards_text(&cat, &view)),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let rows: Vec<Vec<String>> = view
                .records(&cat)
                .filter_map(|r| cat.dataset().rows.get(r.row).cloned())
                .collect();
            match file::write_export(export, &cat.dataset().columns, &rows)? {
                Some(path) => Ok(format!("Wrote {} rows to {}\n", rows.len(), path.display())),
                None => Ok(s!()),
            }
        }
    }
}

fn cards_text(cat: &Catalog, view: &FilteredView) -> String {
    let mut out = join!(&view.summary(cat), "\n");
    if view.is_no_results(cat) {
        out.push('\n');
        out.push_str(&view.no_results_line());
        out.push('\n');
        return out;
    }
    for rec in view.records(cat) {
        out.push('\n');
        out.push_str(&card_text(&build_card(cat, rec)));
    }
    out
}

fn columns_text(cat: &Catalog) -> String {
    let b = cat.bindings();
    let mut out = s!();
    for (i, name) in cat.dataset().columns.iter().enumerate() {
        let roles: Vec<&str> = b.bound().filter(|(_, c)| *c == i).map(|(r, _)| r.key()).collect();
        if roles.is_empty() {
            out.push_str(&format!("{:>3}  {}\n", i, name));
        } else {
            out.push_str(&format!("{:>3}  {}  → {}\n", i, name, roles.join(", ")));
        }
    }
    out
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        let load = &mut params.options.load;
        match a.as_str()
        {
            "--csv" | "--source" => load.source = args.next().ok_or("Missing value for --csv")?,
            "--schema" => {
                let v = args.next().ok_or("Missing value for --schema")?;
                load.schema = SchemaKind::parse(&v)
                    .ok_or_else(|| format!("Unknown schema: {}", v))?;}
            "--match" => {
                let v = args.next().ok_or("Missing value for --match")?;
                load.strategy = Some(MatchStrategy::parse(&v)
                    .ok_or_else(|| format!("Unknown match strategy: {}", v))?);}
            "--line-split" => load.tokenize = TokenizeMode::Lines,
            "--max-rows" => {
                let v: usize = args.next().ok_or("Missing value for --max-rows")?.parse()?;
                if v == 0 { return Err("--max-rows must be at least 1".into()); }
                load.max_rows = v;}
            "--type" => params.type_filter = TypeFilter::parse(&args.next().ok_or("Missing value for --type")?),
            "-q" | "--search" => params.search = Some(args.next().ok_or("Missing search term")?),
            "--link" => params.link = Some(args.next().ok_or("Missing value for --link")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;}
            "--no-headers" => params.options.export.include_headers = false,
            "-o" | "--out" => params.options.export.out_path = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--columns" => params.list_columns = true,
            "--demo" => params.demo = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    // A bare `-o report` gets the format's extension.
    let export = &mut params.options.export;
    if let Some(path) = export.out_path.as_mut() {
        if path.extension().is_none() {
            path.set_extension(export.format.ext());
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn parses_flags() {
        let p = parse_args(args(&[
            "--csv", "in.csv", "--schema", "inferred", "--match", "fields",
            "--type", "flower", "-q", "pine", "--line-split", "--max-rows", "50", "--format", "tsv",
        ]))
        .unwrap();
        assert_eq!(p.options.load.source, "in.csv");
        assert_eq!(p.options.load.schema, SchemaKind::Inferred);
        assert_eq!(p.options.load.strategy, Some(MatchStrategy::FieldScoped));
        assert_eq!(p.options.load.tokenize, TokenizeMode::Lines);
        assert_eq!(p.options.load.max_rows, 50);
        assert_eq!(p.type_filter, TypeFilter::Exact(s!("flower")));
        assert_eq!(p.search.as_deref(), Some("pine"));
        assert_eq!(p.options.export.format, ExportFormat::Tsv);
    }

    #[test]
    fn out_path_gets_format_extension() {
        let p = parse_args(args(&["--format", "csv", "-o", "out/report"])).unwrap();
        assert_eq!(p.options.export.out_path, Some(PathBuf::from("out/report.csv")));
        let p = parse_args(args(&["-o", "notes.md"])).unwrap();
        assert_eq!(p.options.export.out_path, Some(PathBuf::from("notes.md")));
    }

    #[test]
    fn rejects_unknown_and_missing() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--schema"])).is_err());
        assert!(parse_args(args(&["--schema", "v3"])).is_err());
        assert!(parse_args(args(&["--max-rows", "0"])).is_err());
    }

    #[test]
    fn demo_search_via_link() {
        let p = parse_args(args(&["--demo", "--link", "https://x/?q=TR-SAMPLE-007"])).unwrap();
        let out = execute(&p).unwrap();
        assert!(out.starts_with("1 result (demo)"));
        assert!(out.contains("TR-SAMPLE-007"));
    }

    #[test]
    fn demo_no_results() {
        let p = parse_args(args(&["--demo", "-q", "not-a-real-batch"])).unwrap();
        let out = execute(&p).unwrap();
        assert!(out.contains("No results for \"not-a-real-batch\""));
    }
}
