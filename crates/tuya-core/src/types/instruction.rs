//! Device capability descriptors.

use serde::{Deserialize, Serialize};

/// The instruction set a device accepts, from `/v1.0/devices/{id}/functions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionInfo {
    /// Product category code.
    pub category: Option<String>,
    /// The accepted instructions.
    pub functions: Vec<Instruction>,
}

impl InstructionInfo {
    /// Finds an instruction by its data point code.
    pub fn find(&self, code: &str) -> Option<&Instruction> {
        self.functions.iter().find(|f| f.code == code)
    }
}

/// One instruction a device accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instruction {
    /// Data point code.
    pub code: String,
    /// Value type, e.g. `Boolean`, `Integer`, `Enum`, `Json`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// JSON-encoded value constraints (range, step, enum members).
    pub values: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
}

impl Instruction {
    /// Parses the encoded value constraints.
    pub fn value_constraints(&self) -> Option<serde_json::Value> {
        self.values
            .as_deref()
            .and_then(|v| serde_json::from_str(v).ok())
    }
}
