mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::path::PathBuf;
use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use cli::{
    config_to_command, parse_args, print_completion, submission_from_args, Config, ParseOutcome,
};
use domain::command::{CargarArgs, Command};
use domain::{format_money, render_print_html, DrawSlot, Region};
use ports::inbound::UseCaseRunner;
use wiring::{wire_quiniela, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd.name().to_string();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name.as_str()),
        );

        let result = self.dispatch(cmd);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name.as_str())
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: Command) -> Result<i32, Error> {
        match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Cargar(args) => self.cargar(&args),
            Command::Pasadores => {
                for agent in self.app.agents_use_case.list()? {
                    println!("{}\t{}", agent.id, agent.label());
                }
                Ok(0)
            }
            Command::Sorteos => {
                for slot in DrawSlot::ALL {
                    println!("{:<12}{:<5}{}", slot.code(), slot.abbreviation(), slot.label());
                }
                Ok(0)
            }
            Command::Loterias => {
                for region in Region::ALL {
                    println!(
                        "{:<12}{:<5}{}",
                        region.code(),
                        region.abbreviation(),
                        region.label()
                    );
                }
                Ok(0)
            }
            Command::Secuencia => {
                println!("{}", self.app.sequence.peek()?);
                Ok(0)
            }
            Command::Unknown(name) => Err(Error::invalid_argument(format!(
                "unknown command: {}",
                name
            ))),
        }
    }

    fn cargar(&self, args: &CargarArgs) -> Result<i32, Error> {
        let submission = submission_from_args(args);
        let placed = match self.app.place_bets_use_case.place(&submission) {
            Ok(placed) => placed,
            Err(e) => {
                // 保存できなくてもシーケンスは消費済み。発行したチケットは表示する。
                if let Some(ticket) = e.unsaved_ticket() {
                    print!("{}", ticket.receipt);
                    eprintln!(
                        "quiniela: ticket {} was issued but not saved to \"{}\"",
                        ticket.sequence, ticket.collection
                    );
                }
                return Err(e.into());
            }
        };
        print!("{}", placed.receipt);
        eprintln!(
            "quiniela: ticket {} saved to \"{}\" (total ${})",
            placed.sequence,
            placed.collection,
            format_money(placed.total)
        );
        if let Some(path) = args.print.as_deref() {
            self.app
                .fs
                .write(&PathBuf::from(path), &render_print_html(&placed.receipt))?;
        }
        Ok(0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("quiniela: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::SubcommandHelp(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    let app = wire_quiniela(
        config.home_dir.as_ref().map(PathBuf::from),
        config.cargar.terminal.clone(),
    )?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: quiniela [options] <command> [args...]");
}

fn print_help() {
    println!("Usage: quiniela [options] <command> [args...]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -d, --home-dir <directory>    Specify a home directory (overrides QUINIELA_HOME)");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Commands:");
    println!("  cargar       Place bet lines, issue a ticket and save it");
    println!("               -s SORTEO  -l LOTERIA[,LOTERIA...]  -p PASADOR_ID");
    println!("               -j NUMERO:POSICION:IMPORTE (repeat)  [-t TERMINAL] [--print FILE]");
    println!("  pasadores    List pasadores from the directory");
    println!("  sorteos      List draw codes");
    println!("  loterias     List region codes");
    println!("  secuencia    Show the next sequence without consuming it");
    println!("  help         Show this help message");
    println!();
    println!("Environment:");
    println!("  QUINIELA_HOME   Home directory. config/config.json, data/pasadores.json,");
    println!("                  data/jugadas/, state/counter.json and state/logs/ live under it.");
    println!("                  If unset, $XDG_CONFIG_HOME/quiniela, $XDG_DATA_HOME/quiniela and");
    println!("                  $XDG_STATE_HOME/quiniela are used.");
    println!();
    println!("Examples:");
    println!("  quiniela cargar -s PRIMERA -l NACION,PROVIN -p a1 -j 1234:5:10 -j 56:1:2.50");
    println!("  quiniela secuencia");
}
