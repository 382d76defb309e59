//! quiniela コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

/// cargar（ジュガダ受付）の生入力。検証は usecase で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CargarArgs {
    pub sorteo: Option<String>,
    pub loterias: Vec<String>,
    pub pasador: Option<String>,
    /// "NUMERO:POSICION:IMPORTE" 形式
    pub jugadas: Vec<String>,
    pub terminal: Option<String>,
    /// 印刷用 HTML の出力先
    pub print: Option<String>,
}

/// quiniela のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示（コマンド未指定時も）
    Help,
    /// ジュガダを受付け、チケットを発行して保存する
    Cargar(CargarArgs),
    /// pasador 一覧（選択リスト表示）
    Pasadores,
    /// sorteo 一覧
    Sorteos,
    /// lotería 一覧
    Loterias,
    /// 次に発行されるシーケンス（消費しない）
    Secuencia,
    /// 未知のコマンド（エラー用）
    Unknown(String),
}

impl Command {
    /// 引数を取らないコマンドを文字列から解析する
    pub fn parse(s: &str) -> Self {
        match s {
            "help" => Command::Help,
            "pasadores" => Command::Pasadores,
            "sorteos" => Command::Sorteos,
            "loterias" => Command::Loterias,
            "secuencia" => Command::Secuencia,
            _ => Command::Unknown(s.to_string()),
        }
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::Cargar(_) => "cargar",
            Command::Pasadores => "pasadores",
            Command::Sorteos => "sorteos",
            Command::Loterias => "loterias",
            Command::Secuencia => "secuencia",
            Command::Unknown(name) => name,
        }
    }
}
