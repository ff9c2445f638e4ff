//! Quartus QSF assignment renderer.

use std::fmt::Write;

use pinmap_tree::Connection;

use crate::writer::{banner, ConstraintWriter};

/// Renders `set_location_assignment` QSF directives for Quartus.
pub struct Qsf;

impl ConstraintWriter for Qsf {
    fn file_extension(&self) -> &'static str {
        "qsf"
    }

    fn render(&self, connection: &Connection) -> String {
        let mut out = banner();
        for (port, bound) in connection {
            let _ = writeln!(
                out,
                "set_location_assignment {} -to {}",
                bound.fpga_pin, port
            );
            for (property, value) in &bound.set_property {
                let _ = writeln!(
                    out,
                    "set_instance_assignment -name {property} \"{value}\" -to {port}"
                );
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pinmap_tree::BoundPort;

    #[test]
    fn renders_location_and_instance_assignments() {
        let mut props = IndexMap::new();
        props.insert("IO_STANDARD".to_string(), "3.3-V LVTTL".to_string());
        let mut connection = Connection::new();
        connection.insert(
            "led0".to_string(),
            BoundPort {
                node: "pcb".into(),
                end: "term0".into(),
                fpga_pin: "PIN_W15".into(),
                set_property: props,
            },
        );

        let out = Qsf.render(&connection);
        assert!(out.contains("set_location_assignment PIN_W15 -to led0"));
        assert!(out.contains("set_instance_assignment -name IO_STANDARD \"3.3-V LVTTL\" -to led0"));
    }

    #[test]
    fn extension() {
        assert_eq!(Qsf.file_extension(), "qsf");
    }
}
