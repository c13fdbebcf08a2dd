// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pass / super-like / like buttons under the card.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation};

use crate::core::Decision;

/// Row of the three decision buttons
pub struct ActionBar {
    widget: GtkBox,
    pass_button: Button,
    super_like_button: Button,
    like_button: Button,
}

impl ActionBar {
    pub fn new() -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(24)
            .halign(Align::Center)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let pass_button = Self::create_button("✕", "Pass", "pass-button");
        let super_like_button = Self::create_button("★", "Super like", "super-like-button");
        let like_button = Self::create_button("♥", "Like", "like-button");

        widget.append(&pass_button);
        widget.append(&super_like_button);
        widget.append(&like_button);

        Self {
            widget,
            pass_button,
            super_like_button,
            like_button,
        }
    }

    fn create_button(icon: &str, tooltip: &str, css_class: &str) -> Button {
        let button = Button::builder()
            .label(icon)
            .tooltip_text(tooltip)
            .build();
        button.add_css_class("circular");
        button.add_css_class("action-button");
        button.add_css_class(css_class);
        button
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Calls `on_press` with the decision of whichever button is clicked
    pub fn connect_press<F>(&self, on_press: F)
    where
        F: Fn(Decision) + Clone + 'static,
    {
        for (button, decision) in [
            (&self.pass_button, Decision::Pass),
            (&self.super_like_button, Decision::SuperLike),
            (&self.like_button, Decision::Like),
        ] {
            let on_press = on_press.clone();
            button.connect_clicked(move |_| on_press(decision));
        }
    }

    /// Hidden when super-likes are disabled in the tuning file
    pub fn set_super_like_visible(&self, visible: bool) {
        self.super_like_button.set_visible(visible);
    }

    /// Buttons are inert while a detail view or empty deck is shown
    pub fn set_sensitive(&self, sensitive: bool) {
        self.widget.set_sensitive(sensitive);
    }
}

impl Default for ActionBar {
    fn default() -> Self {
        Self::new()
    }
}
