// Command-line interface for amdown
//
// Renders amdown markdown files to HTML pages, navigation menus, print HTML
// and PDF, and exposes the parsed element tree for inspection.
//
// Usage:
//  amdown <input> [--to <format>] [--output <file>]          - Render (default)
//  amdown convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  amdown inspect <path> [<transform>]                       - Show the parsed tree
//  amdown generate-css [--print]                             - Print the built-in CSS
//  amdown --list-transforms                                  - List transforms and formats
//
// The target format is the first of: --to, the output file extension, the
// document's `format` metadata, the configured default.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  amdown page.md --to pdf -o page.pdf --extra-size mobile

mod transforms;

use amdown::formats::html::BASELINE_CSS;
use amdown::formats::print::PRINT_CSS;
use amdown::{FileContext, FormatRegistry, MarkdownDoc, SerializedDocument};
use amdown_config::{AmdownConfig, Loader, PdfPageSize, PROJECT_FILE};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("amdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render extended markdown to HTML, menus, print pages and PDF")
        .long_about(
            "amdown renders a line-oriented markdown dialect (callouts, custom blocks,\n\
            tags, wiki embeds, task lists, tables, LaTeX) to HTML.\n\n\
            Commands:\n  \
            - convert: Render a document (default command)\n  \
            - inspect: View the parsed element tree\n  \
            - generate-css: Print the built-in stylesheets\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            amdown page.md                          # HTML page to stdout\n  \
            amdown page.md -o page.html             # HTML page to a file\n  \
            amdown menu.md --to menu                # Navigation menu fragment\n  \
            amdown page.md --to pdf -o page.pdf     # PDF via headless Chrome\n  \
            amdown inspect page.md                  # Tree visualization",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms and formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an amdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser and renderer decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a document (default command)")
                .long_about(
                    "Render a markdown document.\n\n\
                    Formats:\n  \
                    - html:  HTML5 page with embedded CSS (.html)\n  \
                    - menu:  Navigation menu fragment\n  \
                    - print: Printable HTML\n  \
                    - pdf:   PDF via headless Chrome (.pdf, needs -o)\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    amdown convert page.md --to html -o out.html\n  \
                    amdown page.md --extra-standalone false      # body fragment only",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected when omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the parsed element tree")
                .long_about(
                    "View the structure amdown parsed from a file.\n\n\
                    Transforms:\n  \
                    - ast-treeviz: tree visualization (default)\n  \
                    - ast-json:    element tree and metadata as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-show-inlines   Expand text runs into inline nodes\n\n\
                    Examples:\n  \
                    amdown inspect page.md\n  \
                    amdown inspect page.md ast-json",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'ast-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the CSS embedded in rendered pages")
                .long_about(
                    "Outputs the baseline CSS used for HTML pages.\n\n\
                    Use this as a starting point for custom styling, then pass the\n\
                    file back with --extra-custom-css <path>.\n\n\
                    Examples:\n  \
                    amdown generate-css > custom.css\n  \
                    amdown generate-css --print      # baseline + print styles",
                )
                .arg(
                    Arg::new("print")
                        .long("print")
                        .help("Append the print stylesheet")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "amdown=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("AMDOWN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // A leading file argument means an implicit "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("an input file is required");
            };
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("a path is required");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("ast-treeviz");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("generate-css", sub_matches)) => {
            handle_generate_css_command(sub_matches.get_flag("print"));
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn open_document(path: &str, config: &AmdownConfig) -> MarkdownDoc {
    MarkdownDoc::open(path, config.context.clone()).unwrap_or_else(|e| fail(e))
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &AmdownConfig,
) {
    let doc = open_document(path, config);
    let params = build_inspect_params(config, extra_params);
    let output = transforms::execute_transform(&doc.document, transform, &params)
        .unwrap_or_else(|e| fail(format!("Execution error: {e}")));
    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &AmdownConfig,
) {
    let registry = FormatRegistry::default();
    let doc = open_document(input, config);

    let format = resolve_format(&registry, &doc, to, output, config);
    debug!(format = %format, input, "converting");

    let options = build_format_options(config, &doc, input, extra_params);
    let result = registry
        .serialize_with_options(&doc.document, &format, &options)
        .unwrap_or_else(|e| fail(e));

    match (output, result) {
        (Some(path), data) => {
            fs::write(path, data.into_bytes())
                .unwrap_or_else(|e| fail(format!("writing file '{path}': {e}")));
        }
        (None, SerializedDocument::Text(text)) => {
            print!("{text}");
        }
        (None, SerializedDocument::Binary(_)) => {
            fail("Binary formats (like PDF) require an output file. Use -o <path>.");
        }
    }
}

/// `--to`, then the output file extension, then the document's `format`
/// metadata, then the configured default.
fn resolve_format(
    registry: &FormatRegistry,
    doc: &MarkdownDoc,
    to: Option<&str>,
    output: Option<&str>,
    config: &AmdownConfig,
) -> String {
    let chosen = to
        .map(str::to_string)
        .or_else(|| output.and_then(|path| registry.detect_format_from_filename(path)))
        .or_else(|| {
            doc.meta("format")
                .filter(|name| registry.has(name))
                .map(str::to_string)
        })
        .unwrap_or_else(|| config.render.default_format.clone());
    if let Err(e) = registry.get(&chosen) {
        fail(e);
    }
    chosen
}

/// Configuration, then document-derived defaults, then `--extra-*` values.
fn build_format_options(
    config: &AmdownConfig,
    doc: &MarkdownDoc,
    input: &str,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = config.format_options();
    options
        .entry("title".to_string())
        .or_insert_with(|| doc.title());
    if !options.contains_key("working-dir") {
        let dir = Path::new(input)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        options.insert("working-dir".to_string(), dir.to_string_lossy().into_owned());
    }
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}

/// Handle the generate-css command
fn handle_generate_css_command(print: bool) {
    print!("{BASELINE_CSS}");
    if print {
        print!("\n{PRINT_CSS}");
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|f| f.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<8}{description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> AmdownConfig {
    let loader = Loader::new().with_optional_file(PROJECT_FILE);
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    loader
        .build()
        .unwrap_or_else(|err| fail(format!("Failed to load configuration: {err}")))
}

/// Folds `--extra-*` keys that have a config counterpart into the config.
/// Format-only keys stay in the map and reach the formats untouched.
fn apply_config_overrides(config: &mut AmdownConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("show-inlines") {
        config.inspect.show_inlines = parse_bool_arg("show-inlines", &raw);
    }
    if let Some(raw) = extra_params.remove("standalone") {
        config.render.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(raw) = extra_params.remove("size") {
        config.render.pdf.size = match raw.to_lowercase().as_str() {
            "a4" => PdfPageSize::A4,
            "mobile" => PdfPageSize::Mobile,
            other => fail(format!("Invalid PDF size '{other}' (expected a4 or mobile)")),
        };
    }
    if let Some(path) = take_override(extra_params, &["custom-css", "css"]) {
        config.render.html.custom_css = path;
    }
    if let Some(dir) = extra_params.remove("working-dir") {
        config.context = FileContext {
            working_dir: dir.into(),
            ..config.context.clone()
        };
    }
}

fn build_inspect_params(
    config: &AmdownConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "show-inlines".to_string(),
        config.inspect.show_inlines.to_string(),
    );
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["amdown", "inspect", "file.md"]);
        let (cleaned, extra) = parse_extra_args(&input);
        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_mixed_with_regular_args() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "amdown",
            "convert",
            "page.md",
            "--to",
            "html",
            "--extra-title",
            "Guide",
            "-o",
            "out.html",
        ]));
        assert_eq!(
            cleaned,
            args(&["amdown", "convert", "page.md", "--to", "html", "-o", "out.html"])
        );
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("title"), Some(&"Guide".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flags() {
        let (cleaned, extra) = parse_extra_args(&args(&[
            "amdown",
            "inspect",
            "file.md",
            "--extra-show-inlines",
            "--extras-size",
            "mobile",
            "--extra-standalone",
        ]));
        assert_eq!(cleaned, args(&["amdown", "inspect", "file.md"]));
        assert_eq!(extra.get("show-inlines"), Some(&"true".to_string()));
        assert_eq!(extra.get("size"), Some(&"mobile".to_string()));
        assert_eq!(extra.get("standalone"), Some(&"true".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_flags() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::from([
            ("show-inlines".to_string(), "yes".to_string()),
            ("size".to_string(), "mobile".to_string()),
            ("css".to_string(), "site.css".to_string()),
            ("url-path".to_string(), "/docs".to_string()),
        ]);

        apply_config_overrides(&mut config, &mut extras);

        assert!(config.inspect.show_inlines);
        assert_eq!(config.render.pdf.size, PdfPageSize::Mobile);
        assert_eq!(config.render.html.custom_css, "site.css");
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("url-path"));
    }

    #[test]
    fn inspect_params_include_configured_defaults() {
        let config = load_cli_config(None);
        let overrides = HashMap::from([("custom".to_string(), "value".to_string())]);
        let params = build_inspect_params(&config, &overrides);
        assert_eq!(params.get("show-inlines"), Some(&"false".to_string()));
        assert_eq!(params.get("custom"), Some(&"value".to_string()));
    }
}
