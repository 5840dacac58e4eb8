/// Sampling grids used by the field consumers.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldParams {
    // Half-width of the sampled cube/square, centred on the origin.
    pub extent: f64,
    // Samples per axis.
    pub plane_resolution: usize,
    pub volume_resolution: usize,
    // Percentile (0-100) of volume field values at which the shell is drawn.
    pub iso_percentile: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        FieldParams {
            extent: 0.5,
            plane_resolution: 100,
            volume_resolution: 40,
            iso_percentile: 99.5,
        }
    }
}

impl FieldParams {
    pub fn axis(&self, n: usize) -> Vec<f64> {
        crate::geometry::linspace(-self.extent, self.extent, n)
    }
}
