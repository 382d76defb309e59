//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem};
use common::domain::Dirs;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{
    load_terminal_config, FileCounterStore, JsonAgentDirectory, JsonlTicketStore,
    LoggingTicketStore, StdSequenceGenerator,
};
use crate::ports::outbound::{AgentDirectory, CounterStore, SequenceGenerator, TicketStore};
use crate::usecase::{AgentsUseCase, PlaceBetsUseCase};

const COUNTER_FILENAME: &str = "counter.json";
const AGENTS_FILENAME: &str = "pasadores.json";
const TICKETS_SUBDIR: &str = "jugadas";

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub sequence: Arc<dyn SequenceGenerator>,
    pub agents_use_case: AgentsUseCase,
    pub place_bets_use_case: PlaceBetsUseCase,
}

/// 配線: 環境変数（または -d）からディレクトリを解決して App を組み立てる
pub fn wire_quiniela(home_dir: Option<PathBuf>, terminal: Option<String>) -> Result<App, Error> {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver::new(home_dir));
    let dirs = env_resolver.resolve_dirs()?;
    wire_with_dirs(&dirs, terminal, Arc::new(StdClock))
}

/// 解決済みディレクトリと Clock から App を組み立てる（テストでは一時ディレクトリ・固定時刻を渡す）
pub fn wire_with_dirs(
    dirs: &Dirs,
    terminal: Option<String>,
    clock: Arc<dyn Clock>,
) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));

    let terminal_id = match terminal {
        Some(t) => t,
        None => load_terminal_config(fs.as_ref(), &dirs.config_file())?.terminal,
    };

    let counter_store: Arc<dyn CounterStore> = Arc::new(FileCounterStore::new(
        Arc::clone(&fs),
        dirs.state_dir.join(COUNTER_FILENAME),
    ));
    let sequence: Arc<dyn SequenceGenerator> = Arc::new(StdSequenceGenerator::new(counter_store));
    let agents: Arc<dyn AgentDirectory> = Arc::new(JsonAgentDirectory::new(
        Arc::clone(&fs),
        dirs.data_dir.join(AGENTS_FILENAME),
    ));
    let store: Arc<dyn TicketStore> = Arc::new(LoggingTicketStore::new(
        Arc::new(JsonlTicketStore::new(
            Arc::clone(&fs),
            Arc::clone(&clock),
            dirs.data_dir.join(TICKETS_SUBDIR),
        )),
        Arc::clone(&logger),
    ));

    let place_bets_use_case = PlaceBetsUseCase::new(
        Arc::clone(&agents),
        Arc::clone(&sequence),
        store,
        clock,
        Arc::clone(&logger),
        terminal_id,
    );
    Ok(App {
        fs,
        logger,
        sequence,
        agents_use_case: AgentsUseCase::new(agents),
        place_bets_use_case,
    })
}
