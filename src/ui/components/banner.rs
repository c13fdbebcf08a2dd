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

//! Dismissable banner, used for the match notification and for
//! confirmation errors.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Box as GtkBox, Button, Label, Orientation, Revealer,
    RevealerTransitionType,
};

pub struct Banner {
    widget: Revealer,
    label: Label,
    dismiss_button: Button,
}

impl Banner {
    /// # Arguments
    ///
    /// * `css_class` - Extra style class of the banner box (e.g. "error-banner")
    /// * `dismiss_label` - Text of the dismiss button
    pub fn new(css_class: &str, dismiss_label: &str) -> Self {
        let row = GtkBox::new(Orientation::Horizontal, 12);
        row.add_css_class("banner");
        row.add_css_class(css_class);

        let label = Label::builder()
            .hexpand(true)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        row.append(&label);

        let dismiss_button = Button::builder().label(dismiss_label).build();
        dismiss_button.add_css_class("flat");
        row.append(&dismiss_button);

        let widget = Revealer::builder()
            .transition_type(RevealerTransitionType::SlideDown)
            .reveal_child(false)
            .child(&row)
            .build();

        Self {
            widget,
            label,
            dismiss_button,
        }
    }

    pub fn widget(&self) -> &Revealer {
        &self.widget
    }

    pub fn show(&self, text: &str) {
        self.label.set_text(text);
        self.widget.set_reveal_child(true);
    }

    pub fn hide(&self) {
        self.widget.set_reveal_child(false);
    }

    /// Hides the banner, then calls `on_dismiss`
    pub fn connect_dismiss<F: Fn() + 'static>(&self, on_dismiss: F) {
        let revealer = self.widget.clone();
        self.dismiss_button.connect_clicked(move |_| {
            revealer.set_reveal_child(false);
            on_dismiss();
        });
    }
}
