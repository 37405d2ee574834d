use sheetnest::entities::{NestInstance, NestResult, Placement};
use sheetnest::geometry::Shape;
use sheetnest::geometry::primitives::{Point, Polygon, Rect};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Title};

use crate::config::NestConfig;
use crate::io::svg_util::SvgDrawOptions;

/// Draws a single sheet of `result`: the sheet itself and every part placed on it
pub fn sheet_to_svg(
    sheet_index: usize,
    result: &NestResult,
    instance: &NestInstance,
    config: &NestConfig,
    options: SvgDrawOptions,
) -> Document {
    let sheet_rect = Rect::new(0.0, 0.0, config.sheet_width, config.sheet_height);
    let theme = options.theme.get_theme();
    let margin = 0.025 * f64::max(sheet_rect.width(), sheet_rect.height());
    let stroke_width =
        f64::min(sheet_rect.width(), sheet_rect.height()) * 0.001 * theme.stroke_width_multiplier;

    let utilization = result
        .utilization
        .get(sheet_index)
        .copied()
        .unwrap_or(0.0);

    let sheet_group = Group::new()
        .set("id", format!("sheet_{sheet_index}"))
        .add(data_to_path(
            rect_data(&sheet_rect),
            &[
                ("fill", theme.sheet_fill),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "sheet {sheet_index}, {} x {}, utilization: {:.3}%",
            config.sheet_width,
            config.sheet_height,
            utilization * 100.0
        )));

    let mut parts_group = Group::new().set("id", "parts");
    let mut optionals_group = Group::new().set("id", "optionals");

    for placement in result.placements_on(sheet_index) {
        let part = instance.part(placement.part_idx);
        let anchor = Point(placement.x, placement.y);
        let placed = part.shape.place_at(placement.rotation, anchor);

        if !placed.is_empty() {
            parts_group = parts_group.add(
                data_to_path(
                    polygon_data(&placed),
                    &[
                        ("fill", theme.part_fill),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("fill-rule", "nonzero"),
                        ("opacity", "0.9"),
                    ],
                )
                .add(Title::new(placement_title(placement))),
            );
        }

        if options.footprints {
            let bbox = placed.bbox();
            let footprint = Rect::new(
                placement.x,
                placement.y,
                placement.x + bbox.width(),
                placement.y + bbox.height(),
            )
            .pad(config.spacing, config.spacing);
            optionals_group = optionals_group.add(data_to_path(
                rect_data(&footprint),
                &[
                    ("fill", "none"),
                    ("stroke", theme.footprint_stroke),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                ],
            ));
        }

        if options.anchors {
            optionals_group =
                optionals_group.add(point(anchor, theme.anchor_fill, 3.0 * stroke_width));
        }
    }

    let vbox = (
        sheet_rect.x_min - margin,
        sheet_rect.y_min - margin,
        sheet_rect.width() + 2.0 * margin,
        sheet_rect.height() + 2.0 * margin,
    );

    Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(parts_group)
        .add(optionals_group)
}

fn placement_title(placement: &Placement) -> String {
    format!(
        "part, id: {}, anchor: ({:.3}, {:.3}), rotation: {:.3}°",
        placement.part_id,
        placement.x,
        placement.y,
        placement.rotation.to_degrees()
    )
}

pub fn polygon_data(polygon: &Polygon) -> Data {
    let mut points = polygon.points.iter();
    let mut data = Data::new();
    if let Some(first) = points.next() {
        data = data.move_to::<(f64, f64)>((*first).into());
        for p in points {
            data = data.line_to::<(f64, f64)>((*p).into());
        }
    }
    data.close()
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: &str, rad: f64) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad)
        .set("fill", fill)
}

#[cfg(test)]
mod tests {
    use sheetnest::entities::Part;

    use super::*;

    #[test]
    fn draws_only_parts_of_the_requested_sheet() {
        let instance = NestInstance::new(vec![
            Part::new("a", Polygon::rectangle(10.0, 10.0), 1).unwrap(),
            Part::new("b", Polygon::rectangle(5.0, 5.0), 1).unwrap(),
        ]);
        let placement = |part_idx: usize, sheet_index: usize| Placement {
            part_id: instance.part(part_idx).id.clone(),
            part_idx,
            sheet_index,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
        };
        let result = NestResult {
            placements: vec![placement(0, 0), placement(1, 1)],
            sheets_used: 2,
            utilization: vec![0.25, 0.0625],
            iterations_run: 1,
            ..NestResult::default()
        };
        let config = NestConfig {
            sheet_width: 20.0,
            sheet_height: 20.0,
            ..NestConfig::default()
        };
        let svg = sheet_to_svg(1, &result, &instance, &config, SvgDrawOptions::default())
            .to_string();
        assert!(svg.contains("id: b"));
        assert!(!svg.contains("id: a"));
        assert!(svg.contains("sheet 1"));
    }
}
