use crate::core::Registry;
use crate::domain::component::ComponentRegistry;
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const MIN_QUANTITY: f64 = 0.0;

/// One line of a bill of materials: a component reference plus a quantity.
///
/// The item stores the component's id only and resolves it against the
/// component registry when costing or rendering. A component deleted after
/// the item was added leaves the line unresolvable; such lines contribute
/// nothing to the total and render as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    component_id: String,
    quantity: f64,
}

impl BomItem {
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// A named assembly built from quantities of components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    product_id: String,
    product_name: String,
    items: Vec<BomItem>,
}

impl Bom {
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>) -> Result<Self> {
        let product_id = product_id.into();
        if product_id.is_empty() {
            return Err(PlannerError::InvalidProductId);
        }
        let product_name = product_name.into();
        if product_name.is_empty() {
            return Err(PlannerError::InvalidProductName);
        }
        Ok(Self {
            product_id,
            product_name,
            items: Vec::new(),
        })
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[BomItem] {
        &self.items
    }

    /// Appends a line item after checking that the component exists and the
    /// quantity is strictly positive. Append-only: adding the same component
    /// twice yields two separate lines, both counted in the total. On error
    /// the item list is left untouched.
    pub fn add_item(
        &mut self,
        component_id: &str,
        quantity: f64,
        components: &ComponentRegistry,
    ) -> Result<()> {
        let component = components
            .find(component_id)
            .ok_or_else(|| PlannerError::ComponentNotFound {
                id: component_id.to_string(),
            })?;
        if quantity.is_nan() || quantity <= MIN_QUANTITY {
            return Err(PlannerError::InvalidQuantity { value: quantity });
        }
        self.items.push(BomItem {
            component_id: component.id().to_string(),
            quantity,
        });
        Ok(())
    }

    /// Total material cost: Σ quantity × unit cost over all resolvable
    /// items, recomputed on every call.
    pub fn total_cost(&self, components: &ComponentRegistry) -> f64 {
        self.items
            .iter()
            .filter_map(|item| {
                components
                    .find(&item.component_id)
                    .map(|c| item.quantity * c.unit_cost())
            })
            .sum()
    }

    /// Boxed cost report: one line per item with the component name,
    /// quantity, unit of measure, unit cost and line total, then the grand
    /// total. Display formatting only.
    pub fn report(&self, components: &ComponentRegistry) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "╔═══════════════════════════════════════════════════════╗");
        let _ = writeln!(out, "║ Product: {:<44} ║", self.product_name);
        let _ = writeln!(out, "║ ID: {:<49} ║", self.product_id);
        let _ = writeln!(out, "╠═══════════════════════════════════════════════════════╣");
        if self.items.is_empty() {
            let _ = writeln!(out, "║ No components added yet                               ║");
        } else {
            let _ = writeln!(out, "║ Components:                                           ║");
            for (i, item) in self.items.iter().enumerate() {
                match components.find(&item.component_id) {
                    Some(c) => {
                        let line_total = item.quantity * c.unit_cost();
                        let _ = writeln!(
                            out,
                            "║ {:>2}. {:<14} {:>6.2} {:<4} × ${:>7.2} = ${:>8.2} ║",
                            i + 1,
                            c.name(),
                            item.quantity,
                            c.unit_of_measure(),
                            c.unit_cost(),
                            line_total,
                        );
                    }
                    None => {
                        let _ = writeln!(
                            out,
                            "║ {:>2}. {:<21} {:>6.2} (unknown component) ║",
                            i + 1,
                            item.component_id,
                            item.quantity,
                        );
                    }
                }
            }
        }
        let total = format!("Total: ${:>8.2}", self.total_cost(components));
        let _ = writeln!(out, "╠═══════════════════════════════════════════════════════╣");
        let _ = writeln!(out, "║ {:<53} ║", total);
        let _ = writeln!(out, "╚═══════════════════════════════════════════════════════╝");
        out
    }
}

/// Owns the universe of BOMs, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct BomRegistry {
    inner: Registry<Bom>,
}

impl BomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, bom: Bom) -> Result<()> {
        self.inner
            .add(bom.product_id().to_string(), bom)
            .map_err(|dup| PlannerError::DuplicateProductId { id: dup.0 })
    }

    pub fn get(&self, product_id: &str) -> Result<&Bom> {
        self.inner
            .get(product_id)
            .ok_or_else(|| PlannerError::NotFound {
                id: product_id.to_string(),
            })
    }

    pub fn get_mut(&mut self, product_id: &str) -> Result<&mut Bom> {
        self.inner
            .get_mut(product_id)
            .ok_or_else(|| PlannerError::NotFound {
                id: product_id.to_string(),
            })
    }

    pub fn delete(&mut self, product_id: &str) {
        self.inner.delete(product_id);
    }

    pub fn list_all(&self) -> Vec<&Bom> {
        self.inner.list_all()
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::Component;

    fn registry_with(components: &[(&str, f64)]) -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        for (id, cost) in components {
            registry
                .add(Component::new(*id, format!("part {id}"), "", "kg", *cost, 0).unwrap())
                .unwrap();
        }
        registry
    }

    #[test]
    fn new_rejects_empty_product_fields() {
        assert_eq!(Bom::new("", "Widget").unwrap_err(), PlannerError::InvalidProductId);
        assert_eq!(Bom::new("P1", "").unwrap_err(), PlannerError::InvalidProductName);
    }

    #[test]
    fn add_item_requires_known_component() {
        let components = registry_with(&[("C1", 2.5)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        let err = bom.add_item("C9", 1.0, &components).unwrap_err();
        assert_eq!(
            err,
            PlannerError::ComponentNotFound {
                id: "C9".to_string()
            }
        );
        assert!(bom.items().is_empty());
    }

    #[test]
    fn add_item_requires_strictly_positive_quantity() {
        let components = registry_with(&[("C1", 2.5)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        for quantity in [0.0, -1.0, f64::NAN] {
            let err = bom.add_item("C1", quantity, &components).unwrap_err();
            assert!(
                matches!(err, PlannerError::InvalidQuantity { .. }),
                "quantity {quantity}"
            );
            assert!(bom.items().is_empty());
        }
    }

    #[test]
    fn existence_is_checked_before_quantity() {
        let components = registry_with(&[]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        let err = bom.add_item("C9", 0.0, &components).unwrap_err();
        assert!(matches!(err, PlannerError::ComponentNotFound { .. }));
    }

    #[test]
    fn total_cost_multiplies_and_sums() {
        let components = registry_with(&[("C1", 2.5)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 4.0, &components).unwrap();
        assert_eq!(bom.total_cost(&components), 10.0);
    }

    #[test]
    fn total_cost_over_two_items() {
        let components = registry_with(&[("C1", 3.0), ("C2", 7.0)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 2.0, &components).unwrap();
        bom.add_item("C2", 1.0, &components).unwrap();
        assert_eq!(bom.total_cost(&components), 13.0);
    }

    #[test]
    fn total_cost_is_idempotent() {
        let components = registry_with(&[("C1", 1.25), ("C2", 0.4)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 3.0, &components).unwrap();
        bom.add_item("C2", 5.0, &components).unwrap();
        assert_eq!(bom.total_cost(&components), bom.total_cost(&components));
    }

    #[test]
    fn duplicate_component_yields_two_line_items() {
        let components = registry_with(&[("C1", 2.0)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 1.0, &components).unwrap();
        bom.add_item("C1", 2.0, &components).unwrap();
        assert_eq!(bom.items().len(), 2);
        assert_eq!(bom.total_cost(&components), 6.0);
    }

    #[test]
    fn deleted_component_drops_out_of_cost() {
        let mut components = registry_with(&[("C1", 2.0), ("C2", 5.0)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 1.0, &components).unwrap();
        bom.add_item("C2", 1.0, &components).unwrap();
        components.delete("C1");
        assert_eq!(bom.total_cost(&components), 5.0);
        assert!(bom.report(&components).contains("unknown component"));
    }

    #[test]
    fn report_lists_items_and_total() {
        let components = registry_with(&[("C1", 2.5)]);
        let mut bom = Bom::new("P1", "Widget").unwrap();
        bom.add_item("C1", 4.0, &components).unwrap();
        let report = bom.report(&components);
        assert!(report.contains("Product: Widget"));
        assert!(report.contains("part C1"));
        assert!(report.contains("Total: $   10.00"));
    }

    #[test]
    fn registry_rejects_duplicate_product_id_and_keeps_first() {
        let components = registry_with(&[("C1", 2.0)]);
        let mut boms = BomRegistry::new();
        let mut first = Bom::new("P1", "Widget").unwrap();
        first.add_item("C1", 1.0, &components).unwrap();
        boms.create(first).unwrap();
        let err = boms.create(Bom::new("P1", "Other").unwrap()).unwrap_err();
        assert_eq!(
            err,
            PlannerError::DuplicateProductId {
                id: "P1".to_string()
            }
        );
        let kept = boms.get("P1").unwrap();
        assert_eq!(kept.product_name(), "Widget");
        assert_eq!(kept.items().len(), 1);
    }

    #[test]
    fn registry_delete_is_idempotent() {
        let mut boms = BomRegistry::new();
        boms.create(Bom::new("P1", "Widget").unwrap()).unwrap();
        boms.delete("P2");
        assert_eq!(boms.count(), 1);
        boms.delete("P1");
        boms.delete("P1");
        assert_eq!(boms.count(), 0);
    }
}
