//! 抽選回（sorteo）の列挙とフォールバック規則
//!
//! 既知の 5 つの時間帯はそれぞれ略号と表示名を持つ。未知のコードは生の文字列のまま運び、
//! 略号が必要な場面ではコード自身を返す。

use std::fmt;

/// 既知の抽選時間帯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawSlot {
    LaPrevia,
    Primera,
    Matutina,
    Vespertina,
    Nocturna,
}

impl DrawSlot {
    /// 表示順（一日の時間順）
    pub const ALL: [DrawSlot; 5] = [
        DrawSlot::LaPrevia,
        DrawSlot::Primera,
        DrawSlot::Matutina,
        DrawSlot::Vespertina,
        DrawSlot::Nocturna,
    ];

    /// 列挙キー（チケットの SORTEO 行・保存レコードに出るもの）
    pub fn code(self) -> &'static str {
        match self {
            DrawSlot::LaPrevia => "LAPREVIA",
            DrawSlot::Primera => "PRIMERA",
            DrawSlot::Matutina => "MATUTINA",
            DrawSlot::Vespertina => "VESPERTINA",
            DrawSlot::Nocturna => "NOCTURNA",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DrawSlot::LaPrevia => "PRE",
            DrawSlot::Primera => "PR",
            DrawSlot::Matutina => "MA",
            DrawSlot::Vespertina => "VE",
            DrawSlot::Nocturna => "NO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrawSlot::LaPrevia => "La Previa (10:15)",
            DrawSlot::Primera => "Primera (12:00)",
            DrawSlot::Matutina => "Matutina (15:00)",
            DrawSlot::Vespertina => "Vespertina (18:00)",
            DrawSlot::Nocturna => "Nocturna (21:00)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// 選択された sorteo のコード（既知 or 未知の生コード）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawCode {
    Known(DrawSlot),
    Raw(String),
}

impl DrawCode {
    /// 入力文字列から解析する。空（未選択）なら None。
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        Some(match DrawSlot::from_code(s) {
            Some(slot) => DrawCode::Known(slot),
            None => DrawCode::Raw(s.to_string()),
        })
    }

    pub fn code(&self) -> &str {
        match self {
            DrawCode::Known(slot) => slot.code(),
            DrawCode::Raw(s) => s,
        }
    }

    /// 略号。未知コードはコードそのもの。
    pub fn abbreviation(&self) -> &str {
        match self {
            DrawCode::Known(slot) => slot.abbreviation(),
            DrawCode::Raw(s) => s,
        }
    }
}

impl From<DrawSlot> for DrawCode {
    fn from(slot: DrawSlot) -> Self {
        DrawCode::Known(slot)
    }
}

impl fmt::Display for DrawCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
