use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Pixels, Point, Rectangle, Renderer, Size, Theme};
use pigcare_core::model::{DetectedAnimal, SimulationZone};
use pigcare_core::screens::cctv::DETECTION_BOX;

use crate::style;

/// Bounding boxes drawn over the camera frame.
#[derive(Clone)]
pub struct DetectionOverlay {
    detections: Vec<DetectedAnimal>,
}

impl DetectionOverlay {
    pub fn new(detections: &[DetectedAnimal]) -> Self {
        Self {
            detections: detections.to_vec(),
        }
    }
}

impl<Message> canvas::Program<Message> for DetectionOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (width, height) = DETECTION_BOX;

        for animal in &self.detections {
            let swatch = animal.behavior.swatch();
            let top_left = Point::new(animal.position.x, animal.position.y);
            let outline = Path::rectangle(top_left, Size::new(width, height));
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(style::color(swatch)),
            );

            let caption = animal.caption();
            let label_width = 7.0 * caption.chars().count() as f32;
            let label_origin = Point::new(top_left.x, top_left.y - 18.0);
            frame.fill_rectangle(label_origin, Size::new(label_width, 16.0), style::color(swatch));
            frame.fill_text(Text {
                content: caption,
                position: Point::new(label_origin.x + 3.0, label_origin.y + 2.0),
                color: Color::WHITE,
                size: Pixels(11.0),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Top-down farm plan with one spread circle per infected zone.
#[derive(Clone)]
pub struct FarmLayout {
    zones: Vec<(SimulationZone, u32)>,
}

impl FarmLayout {
    /// `zones` pairs each zone with its current spread radius.
    pub fn new(zones: Vec<(SimulationZone, u32)>) -> Self {
        Self { zones }
    }
}

impl<Message> canvas::Program<Message> for FarmLayout {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgb(0.953, 0.957, 0.965));

        let fence = Path::rectangle(
            Point::new(4.0, 4.0),
            Size::new(bounds.width - 8.0, bounds.height - 8.0),
        );
        frame.stroke(
            &fence,
            Stroke::default().with_width(1.0).with_color(style::STROKE_DIM),
        );

        for (zone, radius) in &self.zones {
            let swatch = zone.risk.swatch();
            let center = Point::new(zone.position.x, zone.position.y);

            if zone.is_spreading() {
                // circle diameter equals the spread radius value
                let spread = Path::circle(center, *radius as f32 / 2.0);
                frame.fill(&spread, style::tint(swatch, 0.25));
                frame.stroke(
                    &spread,
                    Stroke::default()
                        .with_width(1.5)
                        .with_color(style::tint(swatch, 0.6)),
                );
            }

            let marker = Path::circle(center, 8.0);
            frame.fill(&marker, style::color(swatch));
            frame.fill_text(Text {
                content: zone.name.clone(),
                position: Point::new(center.x + 12.0, center.y - 6.0),
                color: style::TEXT_STRONG,
                size: Pixels(12.0),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
