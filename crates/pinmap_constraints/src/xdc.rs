//! Vivado XDC constraint renderer.

use std::fmt::Write;

use pinmap_tree::Connection;

use crate::writer::{banner, ConstraintWriter};

/// Renders `set_property` XDC directives for Vivado.
pub struct Xdc;

impl ConstraintWriter for Xdc {
    fn file_extension(&self) -> &'static str {
        "xdc"
    }

    fn render(&self, connection: &Connection) -> String {
        let mut out = banner();
        for (port, bound) in connection {
            let _ = writeln!(
                out,
                "set_property PACKAGE_PIN {} [get_ports {{{}}}]",
                bound.fpga_pin, port
            );
            for (property, value) in &bound.set_property {
                let _ = writeln!(out, "set_property {property} {value} [get_ports {{{port}}}]");
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

    fn connection() -> Connection {
        let mut props = IndexMap::new();
        props.insert("IOSTANDARD".to_string(), "LVCMOS33".to_string());
        let mut connection = Connection::new();
        connection.insert(
            "clk".to_string(),
            BoundPort {
                node: "pcb".into(),
                end: "term1".into(),
                fpga_pin: "AB12".into(),
                set_property: props,
            },
        );
        connection
    }

    #[test]
    fn renders_package_pin_and_properties() {
        let out = Xdc.render(&connection());
        assert!(out.contains("set_property PACKAGE_PIN AB12 [get_ports {clk}]"));
        assert!(out.contains("set_property IOSTANDARD LVCMOS33 [get_ports {clk}]"));
    }

    #[test]
    fn starts_with_banner() {
        let out = Xdc.render(&Connection::new());
        assert!(out.starts_with("# This file has been auto generated"));
    }
}
