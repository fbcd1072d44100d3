//! Clipboard integration

use tracing::warn;

use super::state::App;

impl App {
    /// 复制当前结果的 IP 到剪贴板
    pub fn copy_ip_to_clipboard(&mut self) {
        let Some(ip) = self.current_result().map(|r| r.ip.clone()) else {
            self.set_error("Nothing to copy yet".to_string());
            return;
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(ip.clone())) {
            Ok(()) => self.set_status(format!("Copied {} to clipboard", ip)),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.set_error(format!("Clipboard unavailable: {}", e));
            }
        }
    }
}
