//! Network serialization/deserialization (feature: `serde`).
//!
//! This module defines a versioned on-disk format for `Network`.
//!
//! Design notes:
//! - We do NOT directly serialize the internal `Network`/`Matrix` structs, so the file format
//!   stays stable even if the internal representation changes.
//! - Deserialization validates shapes, the learning rate, and that all parameters are finite.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Matrix, Network, Result};

pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedNetwork {
    pub format_version: u32,
    pub learning_rate: f64,
    /// `(hidden_nodes, input_nodes)`.
    pub weights_ih: SerializedMatrix,
    /// `(hidden_nodes, 1)`.
    pub bias_h: SerializedMatrix,
    /// `(output_nodes, hidden_nodes)`.
    pub weights_ho: SerializedMatrix,
    /// `(output_nodes, 1)`.
    pub bias_o: SerializedMatrix,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedMatrix {
    pub rows: usize,
    pub cols: usize,
    /// Row-major.
    pub data: Vec<f64>,
}

impl From<&Matrix> for SerializedMatrix {
    fn from(m: &Matrix) -> Self {
        Self {
            rows: m.rows(),
            cols: m.cols(),
            data: m.to_vec(),
        }
    }
}

impl SerializedMatrix {
    fn into_matrix(self, name: &str) -> Result<Matrix> {
        if self.data.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidData(format!(
                "{name} must contain only finite values"
            )));
        }
        Matrix::from_vec(self.rows, self.cols, self.data)
            .map_err(|e| Error::InvalidData(format!("{name} invalid: {e}")))
    }
}

impl SerializedNetwork {
    pub fn validate(&self) -> Result<()> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(Error::InvalidData(format!(
                "unsupported model format_version {}; expected {}",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }
        Ok(())
    }
}

impl From<&Network> for SerializedNetwork {
    fn from(net: &Network) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            learning_rate: net.learning_rate(),
            weights_ih: net.weights_ih().into(),
            bias_h: net.bias_h().into(),
            weights_ho: net.weights_ho().into(),
            bias_o: net.bias_o().into(),
        }
    }
}

impl TryFrom<SerializedNetwork> for Network {
    type Error = Error;

    fn try_from(value: SerializedNetwork) -> std::result::Result<Self, Self::Error> {
        value.validate()?;

        // Network::from_parts checks that the four shapes agree with each other.
        Network::from_parts(
            value.weights_ih.into_matrix("weights_ih")?,
            value.bias_h.into_matrix("bias_h")?,
            value.weights_ho.into_matrix("weights_ho")?,
            value.bias_o.into_matrix("bias_o")?,
            value.learning_rate,
        )
    }
}

impl Network {
    /// Serialize the network to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        let ser = SerializedNetwork::from(self);
        serde_json::to_string_pretty(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize network: {e}")))
    }

    /// Serialize the network to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let ser = SerializedNetwork::from(self);
        serde_json::to_string(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize network: {e}")))
    }

    /// Parse a network from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ser: SerializedNetwork = serde_json::from_str(s)
            .map_err(|e| Error::InvalidData(format!("failed to parse network json: {e}")))?;
        ser.try_into()
    }

    /// Save the network to a JSON file (pretty-printed).
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let s = self.to_json_string_pretty()?;
        let p = path.as_ref();
        std::fs::write(p, s)?;
        tracing::debug!(path = %p.display(), "saved network");
        Ok(())
    }

    /// Load a network from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let s = std::fs::read_to_string(p)?;
        let net = Self::from_json_str(&s)?;
        tracing::debug!(
            path = %p.display(),
            input_nodes = net.input_nodes(),
            hidden_nodes = net.hidden_nodes(),
            output_nodes = net.output_nodes(),
            "loaded network"
        );
        Ok(net)
    }
}
