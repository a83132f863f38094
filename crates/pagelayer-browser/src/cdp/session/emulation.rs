//! Emulation overrides for CDP page session.

use serde_json::json;
use tracing::debug;

use crate::cdp::error::CdpError;
use crate::cdp::protocol::DeviceMetrics;

use super::core::PageSession;

impl PageSession {
    /// Override the layout viewport.
    pub async fn set_viewport(&self, width: u32, height: u32) -> Result<(), CdpError> {
        let metrics = DeviceMetrics::desktop(width, height);
        self.call(
            "Emulation.setDeviceMetricsOverride",
            Some(serde_json::to_value(metrics)?),
        )
        .await?;

        debug!("Viewport set to {}x{}", width, height);
        Ok(())
    }

    /// Enable or disable page script execution. `Runtime.evaluate` still works.
    pub async fn set_script_execution_disabled(&self, disabled: bool) -> Result<(), CdpError> {
        self.call(
            "Emulation.setScriptExecutionDisabled",
            Some(json!({"value": disabled})),
        )
        .await?;
        Ok(())
    }
}
