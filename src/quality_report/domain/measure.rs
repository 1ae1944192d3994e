use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column header of the metrics report
pub const METRICS_CSV_HEADER: [&str; 2] = ["metric", "value"];

/// A named quality indicator attached to a component
///
/// The object sent by the server is kept as received (`bestValue`,
/// `period`, `periods`, key order) and serializes back unchanged, so the
/// ratings can be echoed verbatim. `metric` and `value` are read from it
/// for the metrics report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Measure {
    metric: String,
    value: Option<String>,
    fields: Map<String, Value>,
}

impl Measure {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        let metric = metric.into();
        let value = value.into();
        let mut fields = Map::new();
        fields.insert("metric".to_string(), Value::String(metric.clone()));
        fields.insert("value".to_string(), Value::String(value.clone()));
        Self {
            metric,
            value: Some(value),
            fields,
        }
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Row for the metrics report, `value` empty when the server sent none
    pub fn to_record(&self) -> [&str; 2] {
        [self.metric.as_str(), self.value.as_deref().unwrap_or("")]
    }
}

impl TryFrom<Map<String, Value>> for Measure {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let metric = match fields.get("metric") {
            Some(Value::String(metric)) => metric.clone(),
            Some(other) => return Err(format!("invalid `metric`: {}", other)),
            None => return Err("missing field `metric`".to_string()),
        };
        let value = match fields.get("value") {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => Some(other.to_string()),
        };
        Ok(Self {
            metric,
            value,
            fields,
        })
    }
}

impl From<Measure> for Map<String, Value> {
    fn from(measure: Measure) -> Self {
        measure.fields
    }
}

/// Payload of `measures/component`
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentMeasures {
    pub component: MeasuredComponent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeasuredComponent {
    pub measures: Vec<Measure>,
}

impl ComponentMeasures {
    pub fn into_measures(self) -> Vec<Measure> {
        self.component.measures
    }
}
