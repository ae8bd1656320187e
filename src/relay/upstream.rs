//! Upstream service identities and their base addresses.

use url::Url;

use crate::config::UpstreamsConfig;
use crate::relay::RelayError;

/// One of the three fixed upstream services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    /// Quran text and audio (alquran.cloud).
    Quran,
    /// Hadith collections (hadith.gading.dev).
    Hadith,
    /// Prayer times and Hijri calendar (aladhan.com).
    Aladhan,
}

/// How an upstream wraps its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// `{"status": "OK", "data": ...}`; anything but `"OK"` is a rejection.
    StatusChecked,
    /// `{"data": ...}`; an absent `data` key yields an empty container.
    DataOnly,
}

impl Upstream {
    /// Stable name used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Upstream::Quran => "quran",
            Upstream::Hadith => "hadith",
            Upstream::Aladhan => "aladhan",
        }
    }

    pub fn envelope(self) -> EnvelopeKind {
        match self {
            Upstream::Quran => EnvelopeKind::StatusChecked,
            Upstream::Hadith | Upstream::Aladhan => EnvelopeKind::DataOnly,
        }
    }
}

/// Parsed base URLs, fixed at startup.
#[derive(Debug, Clone)]
pub struct UpstreamBases {
    quran: Url,
    hadith: Url,
    aladhan: Url,
}

impl UpstreamBases {
    pub fn from_config(config: &UpstreamsConfig) -> Result<Self, RelayError> {
        Ok(Self {
            quran: Url::parse(&config.quran_base_url)?,
            hadith: Url::parse(&config.hadith_base_url)?,
            aladhan: Url::parse(&config.aladhan_base_url)?,
        })
    }

    pub fn get(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::Quran => &self.quran,
            Upstream::Hadith => &self.hadith,
            Upstream::Aladhan => &self.aladhan,
        }
    }
}
