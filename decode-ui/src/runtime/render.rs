//! Rendering: frame throttle and drawing.

use std::time::Instant;

use super::AppRuntime;
use crate::screens::{self, View};
use crate::ui::{RenderBuf, ScreenLayout};

impl AppRuntime {
    /// Render at ~60fps if needed.
    pub(crate) fn maybe_render(
        &mut self,
        backend: &mut crate::ui::RatatuiBackend,
    ) -> std::io::Result<()> {
        let now = Instant::now();
        if now.duration_since(self.last_render_time).as_millis() < 16 {
            return Ok(());
        }

        // Re-render while a status message is visible so it disappears on time
        if self.status_bar.current(now).is_some() {
            self.render_needed = true;
        }

        if !self.render_needed {
            return Ok(());
        }
        self.last_render_time = now;
        self.render_needed = false;

        backend.draw(|buf| {
            let area = buf.area;
            if area != self.layout.area {
                self.layout = ScreenLayout::compute(area, self.pad_count);
            }

            let view = View {
                state: self.engine.state(),
                layout: &self.layout,
                sound_enabled: self.sound.is_enabled(),
                show_help: self.show_help,
                visuals: self.effects.visuals(self.engine.now()),
                status: self.status_bar.current(now),
                help_keys: &self.help_keys,
            };
            screens::render(&view, &mut RenderBuf::new(buf));
        })
    }
}
