use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A documentation locale.
///
/// `tag()` is the form used in file names (`index.zh-CN.md`) and metadata
/// directories, `key()` is the form used in generated material JSON (`zh_CN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh_CN",
            Locale::EnUs => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which locales a run generates metadata for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LocaleSelection {
    #[default]
    #[serde(rename = "zh-CN")]
    #[value(name = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    #[value(name = "en-US")]
    EnUs,
    #[serde(rename = "both")]
    #[value(name = "both")]
    Both,
}

impl LocaleSelection {
    /// Requested locales, primary first.
    pub fn locales(&self) -> Vec<Locale> {
        match self {
            LocaleSelection::ZhCn => vec![Locale::ZhCn],
            LocaleSelection::EnUs => vec![Locale::EnUs],
            LocaleSelection::Both => vec![Locale::ZhCn, Locale::EnUs],
        }
    }
}

/// Text carried in one or both locales.
///
/// Serializes as `{"zh_CN": "...", "en_US": "..."}`, omitting absent locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "zh_CN", default, skip_serializing_if = "Option::is_none")]
    pub zh_cn: Option<String>,
    #[serde(rename = "en_US", default, skip_serializing_if = "Option::is_none")]
    pub en_us: Option<String>,
}

impl LocalizedText {
    pub fn new(locale: Locale, text: impl Into<String>) -> Self {
        let mut localized = Self::default();
        localized.set(locale, text);
        localized
    }

    /// The same text under every given locale.
    pub fn uniform(locales: &[Locale], text: &str) -> Self {
        let mut localized = Self::default();
        for &locale in locales {
            localized.set(locale, text);
        }
        localized
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::ZhCn => self.zh_cn.as_deref(),
            Locale::EnUs => self.en_us.as_deref(),
        }
    }

    pub fn set(&mut self, locale: Locale, text: impl Into<String>) {
        let slot = match locale {
            Locale::ZhCn => &mut self.zh_cn,
            Locale::EnUs => &mut self.en_us,
        };
        *slot = Some(text.into());
    }

    /// Fill locales missing here with the other side's text.
    pub fn fill_from(&mut self, other: &LocalizedText) {
        if self.zh_cn.is_none() {
            self.zh_cn = other.zh_cn.clone();
        }
        if self.en_us.is_none() {
            self.en_us = other.en_us.clone();
        }
    }

    /// Keep only the given locales.
    pub fn restrict(&self, locales: &[Locale]) -> Self {
        let mut restricted = Self::default();
        for &locale in locales {
            if let Some(text) = self.get(locale) {
                restricted.set(locale, text);
            }
        }
        restricted
    }

    /// Locales present, in primary-first order.
    pub fn locales(&self) -> Vec<Locale> {
        [Locale::ZhCn, Locale::EnUs]
            .into_iter()
            .filter(|locale| self.get(*locale).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.zh_cn.is_none() && self.en_us.is_none()
    }
}
