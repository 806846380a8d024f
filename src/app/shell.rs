use crate::domain::{Bom, BomRegistry, Component, ComponentRegistry};
use std::io::{self, BufRead, Write};

/// Line-based menu shell over the two registries.
///
/// The registries are injected rather than held as globals; the reader and
/// writer are generic so tests can drive the shell with scripted input.
/// Nothing persists between runs.
pub struct Shell<R, W> {
    input: R,
    output: W,
    components: ComponentRegistry,
    boms: BomRegistry,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_registries(input, output, ComponentRegistry::new(), BomRegistry::new())
    }

    pub fn with_registries(
        input: R,
        output: W,
        components: ComponentRegistry,
        boms: BomRegistry,
    ) -> Self {
        Self {
            input,
            output,
            components,
            boms,
        }
    }

    /// Runs the main menu until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        self.display_welcome()?;
        let result = self.main_menu();
        match result {
            // end of scripted/piped input is a normal exit
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn boms(&self) -> &BomRegistry {
        &self.boms
    }

    /// Consumes the shell, handing back the registries and the writer.
    pub fn into_parts(self) -> (ComponentRegistry, BomRegistry, W) {
        (self.components, self.boms, self.output)
    }

    fn display_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "╔════════════════════════════════════════════╗")?;
        writeln!(self.output, "║  Production Planning Dashboard v1.0        ║")?;
        writeln!(self.output, "╚════════════════════════════════════════════╝")?;
        writeln!(self.output)?;
        writeln!(self.output, "System Status:")?;
        writeln!(
            self.output,
            "  • Components: {} registered",
            self.components.count()
        )?;
        writeln!(self.output, "  • BOMs: {} active", self.boms.count())?;
        writeln!(self.output)
    }

    fn prompt(&mut self, name: &str) -> io::Result<String> {
        writeln!(self.output, "Please enter {}:", name)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim().to_string())
    }

    fn print_menu(&mut self, title: &str, entries: &[&str]) -> io::Result<()> {
        writeln!(self.output, "==={}===", title)?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, entry)?;
        }
        Ok(())
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.print_menu("Main Menu!", &["BOM Menu", "Components Menu", "Exit"])?;
            match self.prompt("option")?.as_str() {
                "1" => self.bom_menu()?,
                "2" => self.component_menu()?,
                "3" => {
                    writeln!(self.output, "Exiting Program")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid Options")?,
            }
        }
    }

    fn component_menu(&mut self) -> io::Result<()> {
        loop {
            self.print_menu(
                "Components Menu!",
                &[
                    "Add Component",
                    "View Component",
                    "List All Components",
                    "Delete Component",
                    "Exit",
                ],
            )?;
            match self.prompt("option")?.as_str() {
                "1" => self.add_component()?,
                "2" => self.view_component()?,
                "3" => self.list_components()?,
                "4" => self.delete_component()?,
                "5" => {
                    writeln!(self.output, "Closing Component Menu")?;
                    writeln!(self.output, "======================")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "invalid options")?,
            }
        }
    }

    fn add_component(&mut self) -> io::Result<()> {
        writeln!(self.output, "===Adding Component===")?;
        let component = match self.read_component_data()? {
            Ok(component) => component,
            Err(message) => {
                writeln!(self.output, "error creating component: {}", message)?;
                return Ok(());
            }
        };
        tracing::debug!(id = component.id(), "adding component");
        match self.components.add(component) {
            Ok(()) => writeln!(self.output, "=======Success========"),
            Err(e) => writeln!(self.output, "error creating component: {}", e),
        }
    }

    /// Prompts for the six component fields. The outer `io::Result` is the
    /// terminal itself failing; the inner result is a validation or parse
    /// problem to report and re-prompt on.
    fn read_component_data(&mut self) -> io::Result<Result<Component, String>> {
        let id = self.prompt("id")?;
        let name = self.prompt("name")?;
        let description = self.prompt("description")?;
        let unit_of_measure = self.prompt("unit of measure")?;
        let raw_cost = self.prompt("unit cost")?;
        let unit_cost: f64 = match raw_cost.parse() {
            Ok(v) => v,
            Err(_) => {
                return Ok(Err(format!(
                    "invalid unit cost '{}': must be a number",
                    raw_cost
                )))
            }
        };
        let raw_lead_time = self.prompt("lead time days")?;
        let lead_time_days: i64 = match raw_lead_time.parse() {
            Ok(v) => v,
            Err(_) => {
                return Ok(Err(format!(
                    "invalid lead time days '{}': must be a number",
                    raw_lead_time
                )))
            }
        };
        Ok(
            Component::new(id, name, description, unit_of_measure, unit_cost, lead_time_days)
                .map_err(|e| e.to_string()),
        )
    }

    fn view_component(&mut self) -> io::Result<()> {
        let id = self.prompt("id")?;
        match self.components.find(&id) {
            Some(component) => {
                let card = component.to_string();
                writeln!(self.output, "{}", card)
            }
            None => writeln!(self.output, "no component with that id"),
        }
    }

    fn list_components(&mut self) -> io::Result<()> {
        if self.components.count() == 0 {
            return writeln!(self.output, "Registry is empty.");
        }
        let cards: Vec<String> = self
            .components
            .list_all()
            .iter()
            .map(|c| c.to_string())
            .collect();
        for card in cards {
            writeln!(self.output, "{}", card)?;
        }
        Ok(())
    }

    fn delete_component(&mut self) -> io::Result<()> {
        let id = self.prompt("id")?;
        let card = match self.components.find(&id) {
            Some(component) => component.to_string(),
            None => return writeln!(self.output, "no component found with that id"),
        };
        writeln!(self.output)?;
        writeln!(self.output, "Component to delete:")?;
        writeln!(self.output, "{}", card)?;
        let confirm = self.prompt("type 'yes' to confirm deletion")?;
        if confirm != "yes" {
            return writeln!(self.output, "deletion cancelled");
        }
        tracing::debug!(id = id.as_str(), "deleting component");
        self.components.delete(&id);
        writeln!(self.output, "component deleted successfully")
    }

    fn bom_menu(&mut self) -> io::Result<()> {
        loop {
            self.print_menu(
                "BOM Menu!",
                &[
                    "List All",
                    "Create BOM",
                    "Select BOM",
                    "View BOM",
                    "Delete BOM",
                    "Exit",
                ],
            )?;
            match self.prompt("option")?.as_str() {
                "1" => self.list_boms()?,
                "2" => self.create_bom()?,
                "3" => self.select_bom()?,
                "4" => self.view_bom()?,
                "5" => {
                    let id = self.prompt("BOM id")?;
                    self.boms.delete(&id);
                }
                "6" => {
                    writeln!(self.output, "Closing BOM Menu")?;
                    writeln!(self.output, "===============")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid Options")?,
            }
        }
    }

    fn list_boms(&mut self) -> io::Result<()> {
        if self.boms.count() == 0 {
            return writeln!(self.output, "BOM Registry is Empty");
        }
        writeln!(self.output, "===All BOM===")?;
        let reports: Vec<String> = self
            .boms
            .list_all()
            .iter()
            .map(|bom| bom.report(&self.components))
            .collect();
        for report in reports {
            write!(self.output, "{}", report)?;
        }
        Ok(())
    }

    fn create_bom(&mut self) -> io::Result<()> {
        writeln!(self.output, "===Creating BOM!===")?;
        let product_id = self.prompt("product ID")?;
        let product_name = self.prompt("product name")?;
        let bom = match Bom::new(product_id, product_name) {
            Ok(bom) => bom,
            Err(e) => return writeln!(self.output, "creating BOM: {}", e),
        };
        tracing::debug!(product_id = bom.product_id(), "creating BOM");
        match self.boms.create(bom) {
            Ok(()) => writeln!(self.output, "======Success======"),
            Err(e) => writeln!(self.output, "creating BOM: {}", e),
        }
    }

    fn select_bom(&mut self) -> io::Result<()> {
        let id = self.prompt("BOM id")?;
        if self.boms.get(&id).is_err() {
            return writeln!(self.output, "no BOM found with id: {}", id);
        }
        self.bom_item_menu(&id)
    }

    fn view_bom(&mut self) -> io::Result<()> {
        let id = self.prompt("BOM id")?;
        match self.boms.get(&id) {
            Ok(bom) => {
                let report = bom.report(&self.components);
                write!(self.output, "{}", report)
            }
            Err(_) => writeln!(self.output, "no BOM found with id: {}", id),
        }
    }

    fn bom_item_menu(&mut self, product_id: &str) -> io::Result<()> {
        loop {
            let title = format!("BOM {} Menu!", product_id);
            self.print_menu(&title, &["View Details", "Add Item", "Exit"])?;
            match self.prompt("option")?.as_str() {
                "1" => {
                    writeln!(self.output, "==Bom Details!===")?;
                    let report = match self.boms.get(product_id) {
                        Ok(bom) => bom.report(&self.components),
                        Err(e) => format!("{}\n", e),
                    };
                    write!(self.output, "{}", report)?;
                }
                "2" => self.add_bom_item(product_id)?,
                "3" => {
                    writeln!(self.output, "Closing BOM {} Menu", product_id)?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid Options")?,
            }
        }
    }

    fn add_bom_item(&mut self, product_id: &str) -> io::Result<()> {
        let component_id = self.prompt("id")?;
        let raw_quantity = self.prompt("quantity")?;
        let quantity: f64 = match raw_quantity.parse() {
            Ok(v) => v,
            Err(_) => {
                return writeln!(
                    self.output,
                    "adding BOM item: parsing quantity '{}' to number failed",
                    raw_quantity
                )
            }
        };
        let result = match self.boms.get_mut(product_id) {
            Ok(bom) => bom.add_item(&component_id, quantity, &self.components),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            return writeln!(self.output, "adding BOM item: {}", e);
        }
        Ok(())
    }
}
