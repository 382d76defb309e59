use crate::domain::command::{CargarArgs, Command};
use crate::domain::{BetLine, DrawCode, RegionCode};
use crate::usecase::BetSubmission;
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

const BIN_NAME: &str = "quiniela";

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub home_dir: Option<String>,
    /// コマンド名（None の場合は Help）
    pub command_name: Option<String>,
    /// cargar の引数（他のコマンドでは空）
    pub cargar: CargarArgs,
}

/// 解析結果: 通常の Config、補完スクリプト生成、またはサブコマンドのヘルプ
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// `quiniela cargar -h` 等で clap が生成したヘルプ
    SubcommandHelp(String),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (overrides QUINIELA_HOME)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_cargar_subcommand() -> clap::Command {
    clap::Command::new("cargar")
        .about("Place bet lines, issue a ticket and save it")
        .arg(
            clap::Arg::new("sorteo")
                .short('s')
                .long("sorteo")
                .value_name("SORTEO")
                .help("Draw code (LAPREVIA, PRIMERA, MATUTINA, VESPERTINA, NOCTURNA)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("loteria")
                .short('l')
                .long("loteria")
                .value_name("LOTERIA")
                .help("Region code; repeat or separate with commas")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("pasador")
                .short('p')
                .long("pasador")
                .value_name("ID")
                .help("Pasador id from the directory")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("jugada")
                .short('j')
                .long("jugada")
                .value_name("NUMERO:POSICION:IMPORTE")
                .help("Bet line; repeat for several lines")
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("terminal")
                .short('t')
                .long("terminal")
                .value_name("ID")
                .help("Terminal id printed on the ticket (overrides config.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("print")
                .long("print")
                .value_name("FILE")
                .help("Also write an 80mm HTML print document to FILE")
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new(BIN_NAME)
            .about("Quiniela ticket terminal: sequence numbering and receipt printing")
            .subcommand_required(false)
            .disable_help_subcommand(true)
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(build_cargar_subcommand())
            .subcommand(clap::Command::new("pasadores").about("List pasadores from the directory"))
            .subcommand(clap::Command::new("sorteos").about("List draw codes"))
            .subcommand(clap::Command::new("loterias").about("List region codes"))
            .subcommand(
                clap::Command::new("secuencia").about("Show the next sequence without consuming it"),
            ),
    )
}

fn strings(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|i| i.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help") || matches.subcommand_matches("help").is_some();
    let home_dir = matches.get_one::<String>("home-dir").cloned();

    let (command_name, cargar) = match matches.subcommand() {
        None | Some(("help", _)) => (None, CargarArgs::default()),
        Some(("cargar", m)) => (
            Some("cargar".to_string()),
            CargarArgs {
                sorteo: m.get_one::<String>("sorteo").cloned(),
                loterias: strings(m, "loteria"),
                pasador: m.get_one::<String>("pasador").cloned(),
                jugadas: strings(m, "jugada"),
                terminal: m.get_one::<String>("terminal").cloned(),
                print: m.get_one::<String>("print").cloned(),
            },
        ),
        Some((name, _)) => (Some(name.to_string()), CargarArgs::default()),
    };

    Config {
        help,
        home_dir,
        command_name,
        cargar,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            return Ok(ParseOutcome::SubcommandHelp(e.render().to_string()));
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Command {
    if config.help {
        return Command::Help;
    }
    match config.command_name.as_deref() {
        Some("cargar") => Command::Cargar(config.cargar.clone()),
        Some(name) => Command::parse(name),
        None => Command::Help,
    }
}

/// "NUMERO:POSICION:IMPORTE" を 1 行に解析する。欠けた項目は空（無効行として扱われる）。
pub fn parse_jugada(arg: &str) -> BetLine {
    let mut parts = arg.splitn(3, ':').map(str::trim);
    BetLine::new(
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    )
}

/// cargar の生入力を受付入力に変換する（CLI 境界）
pub fn submission_from_args(args: &CargarArgs) -> BetSubmission {
    BetSubmission {
        agent_id: args.pasador.clone().unwrap_or_default(),
        draw: args.sorteo.as_deref().and_then(DrawCode::parse),
        regions: args
            .loterias
            .iter()
            .filter_map(|c| RegionCode::parse(c))
            .collect(),
        lines: args.jugadas.iter().map(|j| parse_jugada(j)).collect(),
    }
}
