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

//! Card stage: the current profile card, the next card peeking behind it,
//! the decision tint painted over the card and the empty-deck message.
//!
//! The card is a child of a `gtk4::Fixed` so its transform can be set
//! directly each frame. CSS transitions don't apply to child transforms,
//! so the painted position eases toward the target on the frame clock
//! whenever the card style has a transition.

use gtk4::{
    graphene, gsk, pango::EllipsizeMode, pango::WrapMode::WordChar, prelude::*, Align,
    Box as GtkBox, Button, DrawingArea, Fixed, FlowBox, Frame, Label, Orientation, Overlay,
    Picture, Revealer, SelectionMode,
};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tracing::warn;

use crate::core::{CardStyle, Cursor, OverlayStyle};
use crate::deck::{Profile, EXHAUSTED_MESSAGE};

pub const CARD_WIDTH: f64 = 320.0;
pub const CARD_HEIGHT: f64 = 440.0;

/// Fraction of the remaining distance covered per frame
const EASE_RATE: f64 = 0.2;

/// Card transform as last painted
#[derive(Clone, Copy, Debug, PartialEq)]
struct Painted {
    x: f64,
    y: f64,
    rotation: f64,
    scale: f64,
}

impl Painted {
    const REST: Painted = Painted {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };

    fn target(style: &CardStyle) -> Self {
        Self {
            x: style.translate_x,
            y: style.translate_y,
            rotation: style.rotation_deg,
            scale: style.scale,
        }
    }

    fn approach(self, target: Painted) -> Self {
        Self {
            x: approach(self.x, target.x, 0.5),
            y: approach(self.y, target.y, 0.5),
            rotation: approach(self.rotation, target.rotation, 0.05),
            scale: approach(self.scale, target.scale, 0.001),
        }
    }
}

fn approach(current: f64, target: f64, epsilon: f64) -> f64 {
    let next = current + (target - current) * EASE_RATE;
    if (target - next).abs() < epsilon {
        target
    } else {
        next
    }
}

/// Labels of one profile card
struct CardContent {
    frame: Frame,
    photo: Picture,
    name_label: Label,
    location_label: Label,
    bio_label: Label,
}

impl CardContent {
    fn new(css_class: &str) -> (Self, GtkBox) {
        let content = GtkBox::new(Orientation::Vertical, 6);
        content.set_margin_start(16);
        content.set_margin_end(16);
        content.set_margin_top(16);
        content.set_margin_bottom(16);

        let photo = Picture::builder().vexpand(true).visible(false).build();
        content.append(&photo);

        let name_label = Label::builder().xalign(0.0).build();
        name_label.add_css_class("card-name");
        content.append(&name_label);

        let location_label = Label::builder().xalign(0.0).build();
        location_label.add_css_class("dim-label");
        content.append(&location_label);

        let bio_label = Label::builder()
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .lines(3)
            .ellipsize(EllipsizeMode::End)
            .valign(Align::End)
            .vexpand(true)
            .build();
        content.append(&bio_label);

        let frame = Frame::new(None);
        frame.add_css_class("card");
        frame.add_css_class(css_class);
        frame.set_size_request(CARD_WIDTH as i32, CARD_HEIGHT as i32);

        (
            Self {
                frame,
                photo,
                name_label,
                location_label,
                bio_label,
            },
            content,
        )
    }

    fn show(&self, profile: Option<&Profile>) {
        let Some(profile) = profile else {
            self.frame.set_visible(false);
            return;
        };

        self.frame.set_visible(true);
        self.name_label.set_text(&profile.to_string());
        self.location_label.set_text(&profile.location);
        self.location_label.set_visible(!profile.location.is_empty());
        self.bio_label.set_text(&profile.bio);

        match &profile.primary_photo {
            Some(photo) => {
                self.photo.set_filename(Some(photo));
                self.photo.set_visible(true);
            }
            None => {
                self.photo.set_filename(None::<&str>);
                self.photo.set_visible(false);
            }
        }
    }
}

/// The card stage
pub struct CardView {
    /// Root widget; also the target of the drag and click gestures
    widget: Fixed,
    card: CardContent,
    next_card: CardContent,
    tint_area: DrawingArea,
    detail: Revealer,
    interests_box: FlowBox,
    detail_bio_label: Label,
    close_detail_button: Button,
    empty_box: GtkBox,
    refresh_button: Button,
    /// Card position inside the stage when at rest
    rest_origin: (f64, f64),
    painted: Cell<Painted>,
    tint: Rc<Cell<OverlayStyle>>,
    shown_profile: RefCell<Option<String>>,
}

impl CardView {
    /// # Arguments
    ///
    /// * `stage_width` - Width of the stage, normally the configured viewport width
    pub fn new(stage_width: f64) -> Self {
        let widget = Fixed::new();
        let stage_width = stage_width.max(CARD_WIDTH);
        widget.set_size_request(stage_width as i32, (CARD_HEIGHT + 32.0) as i32);
        widget.set_halign(Align::Center);
        widget.set_overflow(gtk4::Overflow::Visible);
        let rest_origin = ((stage_width - CARD_WIDTH) / 2.0, 16.0);

        // Next card first so the current card paints above it
        let (next_card, next_content) = CardContent::new("next-card");
        next_card.frame.set_child(Some(&next_content));
        widget.put(&next_card.frame, rest_origin.0, rest_origin.1);

        let (card, content) = CardContent::new("current-card");

        let detail_bio_label = Label::builder()
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .build();
        let interests_box = FlowBox::builder()
            .selection_mode(SelectionMode::None)
            .max_children_per_line(4)
            .build();
        let close_detail_button = Button::builder().label("Back").halign(Align::End).build();
        let detail_box = GtkBox::new(Orientation::Vertical, 8);
        detail_box.append(&detail_bio_label);
        detail_box.append(&interests_box);
        detail_box.append(&close_detail_button);
        let detail = Revealer::builder().child(&detail_box).reveal_child(false).build();
        content.append(&detail);

        let tint_area = DrawingArea::new();
        tint_area.set_can_target(false);
        let tint = Rc::new(Cell::new(OverlayStyle::CLEAR));
        let tint_for_draw = tint.clone();
        tint_area.set_draw_func(move |_, cr, _width, _height| {
            let style = tint_for_draw.get();
            if style.opacity <= 0.0 {
                return;
            }
            let (red, green, blue, alpha) = style.color.to_unit();
            cr.set_source_rgba(red, green, blue, alpha * style.opacity);
            if let Err(e) = cr.paint() {
                warn!(error = %e, "failed to paint overlay tint");
            }
        });

        let overlay = Overlay::new();
        overlay.set_child(Some(&content));
        overlay.add_overlay(&tint_area);
        card.frame.set_child(Some(&overlay));
        widget.put(&card.frame, rest_origin.0, rest_origin.1);

        let empty_box = GtkBox::new(Orientation::Vertical, 12);
        empty_box.set_size_request(CARD_WIDTH as i32, CARD_HEIGHT as i32);
        empty_box.set_valign(Align::Center);
        let empty_label = Label::new(Some(EXHAUSTED_MESSAGE));
        empty_label.add_css_class("title-3");
        empty_label.set_vexpand(true);
        empty_label.set_valign(Align::End);
        let refresh_button = Button::builder()
            .label("Refresh Profiles")
            .halign(Align::Center)
            .valign(Align::Start)
            .vexpand(true)
            .build();
        refresh_button.add_css_class("suggested-action");
        empty_box.append(&empty_label);
        empty_box.append(&refresh_button);
        empty_box.set_visible(false);
        widget.put(&empty_box, rest_origin.0, rest_origin.1);

        Self {
            widget,
            card,
            next_card,
            tint_area,
            detail,
            interests_box,
            detail_bio_label,
            close_detail_button,
            empty_box,
            refresh_button,
            rest_origin,
            painted: Cell::new(Painted::REST),
            tint,
            shown_profile: RefCell::new(None),
        }
    }

    pub fn widget(&self) -> &Fixed {
        &self.widget
    }

    pub fn refresh_button(&self) -> &Button {
        &self.refresh_button
    }

    pub fn close_detail_button(&self) -> &Button {
        &self.close_detail_button
    }

    /// Shows `current` on the card and `next` behind it
    ///
    /// A new current card starts at rest; it never eases in from where the
    /// previous card flew off.
    pub fn show_profiles(&self, current: Option<&Profile>, next: Option<&Profile>) {
        let current_id = current.map(|profile| profile.id.clone());
        if *self.shown_profile.borrow() == current_id {
            return;
        }

        self.card.show(current);
        self.next_card.show(next);
        self.empty_box.set_visible(current.is_none());
        self.show_detail(false);

        if let Some(profile) = current {
            self.detail_bio_label.set_text(&profile.bio);
            while let Some(child) = self.interests_box.first_child() {
                self.interests_box.remove(&child);
            }
            for chip in profile.interest_chips() {
                let label = Label::new(Some(&chip));
                label.add_css_class("interest-chip");
                self.interests_box.append(&label);
            }
        }

        self.painted.set(Painted::REST);
        self.apply_transform(Painted::REST);
        *self.shown_profile.borrow_mut() = current_id;
    }

    pub fn show_detail(&self, visible: bool) {
        self.detail.set_reveal_child(visible);
    }

    /// Paints one frame
    pub fn render(&self, style: &CardStyle, overlay: OverlayStyle) {
        let target = Painted::target(style);
        let next = if style.is_animated() {
            self.painted.get().approach(target)
        } else {
            target
        };

        if next != self.painted.get() {
            self.painted.set(next);
            self.apply_transform(next);
        }

        let cursor = match style.cursor {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        };
        self.widget.set_cursor_from_name(Some(cursor));

        if self.tint.get() != overlay {
            self.tint.set(overlay);
            self.tint_area.queue_draw();
        }
    }

    fn apply_transform(&self, painted: Painted) {
        let half_width = (CARD_WIDTH / 2.0) as f32;
        let half_height = (CARD_HEIGHT / 2.0) as f32;

        // Rotate and scale around the card centre
        let transform = gsk::Transform::new()
            .translate(&graphene::Point::new(
                (self.rest_origin.0 + painted.x) as f32 + half_width,
                (self.rest_origin.1 + painted.y) as f32 + half_height,
            ))
            .rotate(painted.rotation as f32)
            .scale(painted.scale as f32, painted.scale as f32)
            .translate(&graphene::Point::new(-half_width, -half_height));

        self.widget.set_child_transform(&self.card.frame, Some(&transform));
    }
}
