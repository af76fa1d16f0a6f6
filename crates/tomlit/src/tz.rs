//! Fixed-offset timezone handles and their cache.
//!
//! Documents tend to repeat one offset many times, so handles are memoized by
//! their `(sign, hour, minute)` triple. Two lookups of the same triple return
//! clones of one handle, which [`TzHandle::ptr_eq`] can observe.

use std::{fmt, sync::Arc};

use dashmap::DashMap;
use jiff::tz::{Offset, TimeZone};
use once_cell::sync::Lazy;

use crate::{Error, matcher::Sign};

static UTC: Lazy<TzHandle> = Lazy::new(|| TzHandle::new(Offset::UTC));

static GLOBAL: Lazy<Arc<OffsetCache>> = Lazy::new(|| Arc::new(OffsetCache::new()));

#[derive(Debug)]
struct FixedZone {
    offset: Offset,
    tz: TimeZone,
}

/// A shared, immutable fixed-offset timezone.
///
/// Cloning is a reference count bump. Equality compares offsets; use
/// [`TzHandle::ptr_eq`] to compare identity.
#[derive(Clone)]
pub struct TzHandle(Arc<FixedZone>);

impl TzHandle {
    fn new(offset: Offset) -> Self {
        TzHandle(Arc::new(FixedZone {
            offset,
            tz: TimeZone::fixed(offset),
        }))
    }

    /// The process-wide UTC handle used for `Z` suffixes.
    #[must_use]
    pub fn utc() -> Self {
        UTC.clone()
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.0.offset
    }

    #[must_use]
    pub fn time_zone(&self) -> &TimeZone {
        &self.0.tz
    }

    /// True only for the `Z` singleton; a `+00:00` offset is not UTC here.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        Self::ptr_eq(self, &UTC)
    }

    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for TzHandle {
    fn eq(&self, other: &Self) -> bool {
        self.offset() == other.offset()
    }
}

impl Eq for TzHandle {}

impl fmt::Display for TzHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_utc() {
            return f.write_str("Z");
        }
        let seconds = self.offset().seconds();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.unsigned_abs() / 60;
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl fmt::Debug for TzHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TzHandle({self})")
    }
}

/// Memoizes fixed-offset handles for the lifetime of the cache.
///
/// The map's per-shard entry lock makes lookup-or-construct atomic, so
/// concurrent first use of a key builds exactly one handle. Nothing is ever
/// evicted: the grammar allows at most 2 * 24 * 60 distinct keys.
#[derive(Debug, Default)]
pub struct OffsetCache {
    zones: DashMap<(Sign, u8, u8), TzHandle>,
}

impl OffsetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache shared by the whole process.
    #[must_use]
    pub fn global() -> Arc<OffsetCache> {
        Arc::clone(&GLOBAL)
    }

    /// Returns the handle for `sign hour:minute`, creating it on first use.
    ///
    /// `hour` and `minute` are the two-digit strings of a matched zone; any
    /// other input is rejected with [`Error::InvalidOffset`].
    pub fn get_or_create(&self, sign: Sign, hour: &str, minute: &str) -> Result<TzHandle, Error> {
        let invalid = || Error::InvalidOffset {
            literal: format!("{}{hour}:{minute}", sign.as_char()),
        };
        let h = parse_two_digits(hour, 23).ok_or_else(invalid)?;
        let m = parse_two_digits(minute, 59).ok_or_else(invalid)?;

        let key = (sign, h, m);
        if let Some(zone) = self.zones.get(&key) {
            return Ok(zone.clone());
        }

        let magnitude = i32::from(h) * 3600 + i32::from(m) * 60;
        let seconds = match sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        };
        let offset = Offset::from_seconds(seconds).map_err(|_| invalid())?;
        let zone = self
            .zones
            .entry(key)
            .or_insert_with(|| {
                trace!("caching fixed offset {}{hour}:{minute}", sign.as_char());
                TzHandle::new(offset)
            })
            .clone();
        Ok(zone)
    }

    /// Number of distinct offsets constructed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

fn parse_two_digits(s: &str, max: u8) -> Option<u8> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|&n| n <= max)
}
