//! Scene text builder for generated inputs

use std::fmt::Write;

/// Accumulates object records in scene syntax.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    text: String,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            text: "%YAML 1.1\n%TAG !u! tag:unity3d.com,2011:\n".to_string(),
        }
    }

    /// Container object with the given components
    pub fn container(mut self, id: u64, components: &[u64]) -> Self {
        let _ = writeln!(self.text, "--- !u!1 &{id}\nGameObject:\n  m_ObjectHideFlags: 0");
        if components.is_empty() {
            self.text.push_str("  m_Component: []\n");
        } else {
            self.text.push_str("  m_Component:\n");
            for component in components {
                let _ = writeln!(self.text, "  - component: {{fileID: {component}}}");
            }
        }
        self.text.push_str("  m_Layer: 0\n");
        self
    }

    /// Plain object with outgoing references and `(type marker, guid)` assets
    pub fn object(mut self, id: u64, type_name: &str, references: &[u64], assets: &[(u64, &str)]) -> Self {
        let _ = writeln!(self.text, "--- !u!114 &{id}\n{type_name}:\n  m_Enabled: 1");
        for (index, reference) in references.iter().enumerate() {
            let _ = writeln!(self.text, "  m_Ref{index}: {{fileID: {reference}}}");
        }
        for (marker, guid) in assets {
            let _ = writeln!(self.text, "  m_Script: {{fileID: {marker}, guid: {guid}, type: 3}}");
        }
        self
    }

    pub fn build(self) -> String {
        self.text
    }
}
