use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub key: String,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankDirection {
    #[default]
    Ascending,
    Descending,
}

impl RankDirection {
    /// `"desc"` ranks descending, anything else (including no flag) ascending.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Snapshot `counts` as entries ordered by value, leaving `counts` untouched.
///
/// Equal values are always ordered by key ascending, in both directions, so output is
/// reproducible run to run.
pub fn rank<'a, I>(counts: I, direction: RankDirection) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a String, &'a u64)>,
{
    let mut entries: Vec<RankedEntry> = counts
        .into_iter()
        .map(|(key, value)| RankedEntry {
            key: key.clone(),
            value: *value,
        })
        .collect();

    entries.sort_by(|a, b| {
        let by_value = match direction {
            RankDirection::Ascending => a.value.cmp(&b.value),
            RankDirection::Descending => b.value.cmp(&a.value),
        };
        by_value.then_with(|| a.key.cmp(&b.key))
    });

    entries
}
