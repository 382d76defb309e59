//! 地域宝くじ（lotería / provincia）の列挙と選択集合

use std::fmt;

/// 既知の地域コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nacion,
    Provincia,
    SantaFe,
    Cordoba,
    Uruguay,
    EntreRios,
    Mendoza,
    Corrientes,
    Chaco,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::Nacion,
        Region::Provincia,
        Region::SantaFe,
        Region::Cordoba,
        Region::Uruguay,
        Region::EntreRios,
        Region::Mendoza,
        Region::Corrientes,
        Region::Chaco,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Nacion => "NACION",
            Region::Provincia => "PROVIN",
            Region::SantaFe => "SANTA",
            Region::Cordoba => "CORDOB",
            Region::Uruguay => "URUGUA",
            Region::EntreRios => "ENTRE",
            Region::Mendoza => "MENDOZ",
            Region::Corrientes => "CORRIE",
            Region::Chaco => "CHACO",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Region::Nacion => "N",
            Region::Provincia => "P",
            Region::SantaFe => "SF",
            Region::Cordoba => "C",
            Region::Uruguay => "U",
            Region::EntreRios => "E",
            Region::Mendoza => "M",
            Region::Corrientes => "CR",
            Region::Chaco => "CH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Nacion => "Nacional",
            Region::Provincia => "Provincia",
            Region::SantaFe => "Santa Fe",
            Region::Cordoba => "Córdoba",
            Region::Uruguay => "Uruguay",
            Region::EntreRios => "Entre Ríos",
            Region::Mendoza => "Mendoza",
            Region::Corrientes => "Corrientes",
            Region::Chaco => "Chaco",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// 選択された地域コード（既知 or 未知の生コード）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegionCode {
    Known(Region),
    Raw(String),
}

impl RegionCode {
    /// 入力文字列から解析する。空なら None。
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        Some(match Region::from_code(s) {
            Some(r) => RegionCode::Known(r),
            None => RegionCode::Raw(s.to_string()),
        })
    }

    pub fn code(&self) -> &str {
        match self {
            RegionCode::Known(r) => r.code(),
            RegionCode::Raw(s) => s,
        }
    }

    /// 略号。未知コードはコードそのもの。
    pub fn abbreviation(&self) -> &str {
        match self {
            RegionCode::Known(r) => r.abbreviation(),
            RegionCode::Raw(s) => s,
        }
    }
}

impl From<Region> for RegionCode {
    fn from(r: Region) -> Self {
        RegionCode::Known(r)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 選択済み地域の集合（選択順を保持し、同じコードは 1 度だけ）
///
/// 件数は合計金額の倍率になる（1 ジュガダは選択地域ごとに複製される）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSelection(Vec<RegionCode>);

impl RegionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加する。既に含まれていれば何もしない。
    pub fn insert(&mut self, code: RegionCode) -> bool {
        if self.0.contains(&code) {
            return false;
        }
        self.0.push(code);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionCode> {
        self.0.iter()
    }

    /// 生コードの一覧（保存レコードの provincias）
    pub fn codes(&self) -> Vec<String> {
        self.0.iter().map(|c| c.code().to_string()).collect()
    }

    /// 略号の一覧。初出順で重複を除く（異なるコードが同じ略号になる場合も 1 度だけ）。
    pub fn abbreviations(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.0.len());
        for c in &self.0 {
            let a = c.abbreviation();
            if !out.contains(&a) {
                out.push(a);
            }
        }
        out
    }
}

impl FromIterator<RegionCode> for RegionSelection {
    fn from_iter<I: IntoIterator<Item = RegionCode>>(iter: I) -> Self {
        let mut sel = RegionSelection::new();
        for c in iter {
            sel.insert(c);
        }
        sel
    }
}
