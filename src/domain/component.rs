use crate::core::Registry;
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_UNIT_COST: f64 = 0.0;
const MIN_LEAD_TIME_DAYS: i64 = 0;

fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(PlannerError::InvalidId {
            id: id.to_string(),
            reason: "id cannot be empty".to_string(),
        });
    }
    if id.chars().any(char::is_whitespace) {
        return Err(PlannerError::InvalidId {
            id: id.to_string(),
            reason: "id cannot contain whitespace".to_string(),
        });
    }
    Ok(id)
}

/// A purchasable or stockable part. Immutable once constructed; the only
/// lifecycle events are registry insert and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    id: String,
    name: String,
    description: String,
    unit_of_measure: String,
    unit_cost: f64,
    lead_time_days: i64,
}

impl Component {
    /// Validates and builds a component. Checks run in order: id, name,
    /// unit cost, lead time. Surrounding whitespace on the id is trimmed
    /// before validation and not stored.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_of_measure: impl Into<String>,
        unit_cost: f64,
        lead_time_days: i64,
    ) -> Result<Self> {
        let id = id.into();
        let id = validate_id(&id)?.to_string();
        let name = name.into();
        if name.is_empty() {
            return Err(PlannerError::InvalidName);
        }
        if unit_cost.is_nan() || unit_cost < MIN_UNIT_COST {
            return Err(PlannerError::InvalidUnitCost { value: unit_cost });
        }
        if lead_time_days < MIN_LEAD_TIME_DAYS {
            return Err(PlannerError::InvalidLeadTime {
                value: lead_time_days,
            });
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            unit_of_measure: unit_of_measure.into(),
            unit_cost,
            lead_time_days,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_of_measure(&self) -> &str {
        &self.unit_of_measure
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn lead_time_days(&self) -> i64 {
        self.lead_time_days
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_cost = format!("${:.2} per {}", self.unit_cost, self.unit_of_measure);
        let lead_time = format!("{} days", self.lead_time_days);
        writeln!(f, "┌─ Component ──────────────────────────┐")?;
        writeln!(f, "│ ID:          {:<23} │", self.id)?;
        writeln!(f, "│ Name:        {:<23} │", self.name)?;
        writeln!(f, "│ Description: {:<23} │", self.description)?;
        writeln!(f, "│ Unit Cost:   {:<23} │", unit_cost)?;
        writeln!(f, "│ Lead Time:   {:<23} │", lead_time)?;
        write!(f, "└──────────────────────────────────────┘")
    }
}

/// Owns the universe of components, keyed by component id.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    inner: Registry<Component>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: Component) -> Result<()> {
        self.inner
            .add(component.id().to_string(), component)
            .map_err(|dup| PlannerError::DuplicateId { id: dup.0 })
    }

    pub fn get(&self, id: &str) -> Result<&Component> {
        self.inner.get(id).ok_or_else(|| PlannerError::NotFound {
            id: id.to_string(),
        })
    }

    /// Plain lookup, used where absence is an expected outcome rather
    /// than an error (BOM item resolution).
    pub fn find(&self, id: &str) -> Option<&Component> {
        self.inner.get(id)
    }

    pub fn delete(&mut self, id: &str) {
        self.inner.delete(id);
    }

    pub fn list_all(&self) -> Vec<&Component> {
        self.inner.list_all()
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }
}
