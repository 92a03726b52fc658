use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Results of one group, keyed by week.
pub type WeekResults = BTreeMap<String, Vec<MatchResult>>;

/// The whole site's data: `location -> league -> group -> results`.
///
/// Mutable backends always read and rewrite this aggregate as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueData {
    pub locations: BTreeMap<String, BTreeMap<String, League>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    /// Leagues announced before their groups are drawn carry no `groups` key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<BTreeMap<String, Group>>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<WeekResults>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// A single reported match. The fields are whatever the site submits,
/// typically `home`, `away` and `score`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    pub fields: Map<String, Value>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for MatchResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl LeagueData {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn group(&self, location: &str, league: &str, group: &str) -> Option<&Group> {
        self.locations.get(location)?.get(league)?.groups.as_ref()?.get(group)
    }

    pub fn group_mut(&mut self, location: &str, league: &str, group: &str) -> Result<&mut Group> {
        self.locations
            .get_mut(location)
            .and_then(|leagues| leagues.get_mut(league))
            .and_then(|l| l.groups.as_mut())
            .and_then(|groups| groups.get_mut(group))
            .ok_or_else(|| GatewayError::UnknownGroup {
                location: location.to_string(),
                league: league.to_string(),
                group: group.to_string(),
            })
    }

    pub fn results(&self, location: &str, league: &str, group: &str, week: &str) -> Option<&[MatchResult]> {
        self.group(location, league, group)?
            .results
            .as_ref()?
            .get(week)
            .map(Vec::as_slice)
    }

    /// Appends `result` to the week's list, creating the `results` map and the
    /// week entry when missing. The group itself must already exist.
    pub fn append_result(
        &mut self,
        location: &str,
        league: &str,
        group: &str,
        week: &str,
        result: MatchResult,
    ) -> Result<()> {
        let group = self.group_mut(location, league, group)?;
        group
            .results
            .get_or_insert_with(BTreeMap::new)
            .entry(week.to_string())
            .or_default()
            .push(result);
        Ok(())
    }
}
