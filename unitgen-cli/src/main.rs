use clap::Parser;
use unitgen_cli::commands::create;
use unitgen_cli::commands::templates::Framework;
use unitgen_cli::unit::UnitKind;

#[derive(Parser)]
#[command(
    name = "create-component",
    version,
    about = "Quickly scaffold a Vue/React component or page"
)]
struct Cli {
    /// Component or page name, in kebab-case (e.g. user-profile)
    name: String,

    /// Kind of unit to create
    #[arg(short = 't', long = "type", value_enum, default_value_t = UnitKind::Component)]
    kind: UnitKind,

    /// Force a template dialect instead of detecting it from package.json
    #[arg(long, value_enum)]
    framework: Option<Framework>,
}

fn main() {
    unitgen_cli::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = create::run(&cli.name, cli.kind, cli.framework) {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
