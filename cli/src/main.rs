use clap::{Arg, ArgAction, ArgMatches, Command};
use pluck_core::{Host, Value, json_to_value, values_to_json_array};
use std::collections::HashMap;
use std::fs;

mod output;

fn main() {
    let cli = Command::new("Pluck CLI")
        .version("0.1.0")
        .about("Record-select lookups over JSON data");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();
    dispatch_commands(&matches);
}

/// Sets up the CLI with subcommands and arguments.
/// This function configures the command-line interface using the `clap` crate.
/// It defines subcommands for evaluating a lookup against a JSON data file
/// and for listing the registered lookup plugins.
fn setup_cli(cli: Command) -> Command {
    cli.subcommand(
        Command::new("run")
            .about("Evaluate the pluck lookup against a JSON data file")
            .arg(
                Arg::new("file")
                    .help("JSON file holding the record list")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("select-value")
                    .help("Value matched against the match field")
                    .required(true)
                    .index(2),
            )
            .arg(
                Arg::new("result-field")
                    .help("Field returned from the matching record")
                    .required(true)
                    .index(3),
            )
            .arg(
                Arg::new("select-key")
                    .help("Override the default 'name' match field")
                    .short('k')
                    .long("select-key")
                    .value_parser(clap::value_parser!(String))
                    .value_name("FIELD"),
            )
            .arg(
                Arg::new("json")
                    .help("Print results as a JSON array")
                    .long("json")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(
        Command::new("lookups")
            .about("List registered lookup plugins")
            .arg(
                Arg::new("json")
                    .help("Print lookup metadata as JSON")
                    .long("json")
                    .action(ArgAction::SetTrue),
            ),
    )
}

/// Dispatches the command based on the parsed arguments.
/// This function matches the subcommand used and calls the appropriate handler.
fn dispatch_commands(matches: &ArgMatches) {
    match matches.subcommand() {
        Some(("run", sub_m)) => {
            run_command(sub_m);
        }
        Some(("lookups", sub_m)) => {
            lookups_command(sub_m);
        }
        _ => {
            println!("No valid subcommand was used. Use --help for more information.");
        }
    }
}

fn run_command(sub_m: &ArgMatches) {
    let file = sub_m.get_one::<String>("file").expect("required argument");
    let select_value = sub_m
        .get_one::<String>("select-value")
        .expect("required argument");
    let result_field = sub_m
        .get_one::<String>("result-field")
        .expect("required argument");

    let raw = match fs::read_to_string(file) {
        Ok(raw) => raw,
        Err(e) => {
            output::print_error(&format!("reading {}: {}", file, e));
            std::process::exit(1);
        }
    };
    let data: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            output::print_error(&format!("parsing {}: {}", file, e));
            std::process::exit(1);
        }
    };

    let mut terms = vec![
        json_to_value(&data),
        Value::Str(select_value.clone()),
        Value::Str(result_field.clone()),
    ];
    if let Some(key) = sub_m.get_one::<String>("select-key") {
        let mut flags = HashMap::new();
        flags.insert("select_key".to_string(), Value::Str(key.clone()));
        terms.push(Value::Object(flags));
    }

    let host = Host::with_builtins();
    match host.run_lookup("pluck", terms, &HashMap::new()) {
        Ok(results) => {
            if sub_m.get_flag("json") {
                println!("{}", values_to_json_array(&results));
            } else {
                for result in &results {
                    println!("{}", output::render_value(result));
                }
            }
        }
        Err(e) => {
            output::print_error(&e);
            std::process::exit(1);
        }
    }
}

fn lookups_command(sub_m: &ArgMatches) {
    let host = Host::with_builtins();
    let mut names = host.registered_lookup_names();
    names.sort();

    if sub_m.get_flag("json") {
        let metas: HashMap<String, pluck_core::LookupMetadata> = names
            .iter()
            .filter_map(|name| host.lookup_metadata(name).map(|m| (name.clone(), m)))
            .collect();
        match serde_json::to_string_pretty(&metas) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                output::print_error(&format!("serializing lookup metadata: {}", e));
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", output::render_lookup_table(&host, &names));
}
