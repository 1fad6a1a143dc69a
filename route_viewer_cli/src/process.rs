use std::path::{Path, PathBuf};

use clap::Args;
use comfy_table::Table;
use jiff::Zoned;
use route_pipeline::{
    display::route_stop::RouteStop,
    format::{format_duration, format_eta, step_header},
    route::{LineMode, PointOptions, Route},
};
use serde_json::json;
use tracing::info;
use vroom_client::response::VroomResponse;

use crate::file_utils::{read_json, write_output};

#[derive(Args)]
pub struct RenderArgs {
    /// Draw straight lines between stops instead of the street geometry
    #[arg(long, default_value_t = false)]
    pub direct: bool,

    /// Do not draw pickup points
    #[arg(long, default_value_t = false)]
    pub hide_pickups: bool,

    /// Departure time of every route, defaults to now
    #[arg(long)]
    pub departure: Option<Zoned>,

    /// Output file, stdout when omitted
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

impl RenderArgs {
    fn line_mode(&self) -> LineMode {
        if self.direct {
            LineMode::Direct
        } else {
            LineMode::Encoded
        }
    }

    fn point_options(&self) -> PointOptions {
        PointOptions {
            hide_pickups: self.hide_pickups,
            departure: Some(self.departure.clone().unwrap_or_else(Zoned::now)),
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Solver response file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args)]
pub struct TableArgs {
    /// Solver response file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Departure time used for the ETA column, defaults to now
    #[arg(long)]
    pub departure: Option<Zoned>,
}

fn load_routes(input: &Path) -> Result<Vec<Route>, anyhow::Error> {
    let response: VroomResponse = read_json(input)?;
    let mut routes = response.into_routes()?;

    for route in routes.iter_mut() {
        route.optimize();
    }

    Ok(routes)
}

/// GeoJSON layers of every route: the line and the stop markers.
pub fn render_routes(routes: &[Route], args: &RenderArgs) -> Result<String, anyhow::Error> {
    let mode = args.line_mode();
    let options = args.point_options();

    let layers = routes
        .iter()
        .map(|route| {
            Ok(json!({
                "vehicle": route.vehicle(),
                "line": route.geometry_as_line(mode)?,
                "points": route.steps_as_points(&options)?,
            }))
        })
        .collect::<Result<Vec<_>, anyhow::Error>>()?;

    Ok(serde_json::to_string_pretty(&layers)?)
}

pub fn run(args: ProcessArgs) -> Result<(), anyhow::Error> {
    let routes = load_routes(&args.input)?;
    info!(routes = routes.len(), "Loaded solution");

    let output = render_routes(&routes, &args.render)?;
    write_output(args.render.out.as_ref(), &output)
}

pub fn route_table(route: &Route, departure: &Zoned) -> Result<Table, anyhow::Error> {
    let mut table = Table::new();
    table.set_header(vec![
        "Step",
        "Description",
        "Arrival",
        "ETA",
        "Distance (km)",
        "Duration",
        "Speed (km/h)",
    ]);

    for unit in route.steps() {
        let speed = unit
            .average_speed()
            .map(|speed| format!("{:.1}", speed.value()))
            .unwrap_or_default();

        table.add_row(vec![
            step_header(unit),
            unit.description().to_string(),
            format_duration(unit.arrival()),
            format_eta(departure, unit.arrival())?,
            format!("{:.2}", unit.distance().kilometers()),
            format_duration(unit.total_duration()),
            speed,
        ]);
    }

    Ok(table)
}

pub fn run_table(args: TableArgs) -> Result<(), anyhow::Error> {
    let routes = load_routes(&args.input)?;
    let departure = args.departure.unwrap_or_else(Zoned::now);

    for route in &routes {
        println!(
            "Vehicle {} | {:.2} km | {}",
            route.vehicle(),
            route.distance().kilometers(),
            format_duration(route.total_duration())
        );
        println!("{}", route_table(route, &departure)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use route_pipeline::step::{
        location::Location, route_step::RouteStepBuilder, step_kind::StepKind,
    };

    use super::*;

    fn route() -> Route {
        let steps = [
            (StepKind::Start, None, 0),
            (StepKind::Pickup, Some(0), 60),
            (StepKind::Delivery, Some(0), 600),
            (StepKind::End, None, 1200),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (kind, id, arrival))| {
            let mut builder = RouteStepBuilder::new(kind);
            builder
                .set_description(format!("Stop {index}"))
                .set_location(Location::from_lon_lat(12.0 + index as f64, 51.0))
                .set_arrival(SignedDuration::from_secs(arrival));
            if let Some(id) = id {
                builder.set_id(id);
            }
            builder.build()
        })
        .collect();

        let mut route = Route::new(1, steps);
        route.optimize();
        route
    }

    fn render_args(direct: bool) -> RenderArgs {
        RenderArgs {
            direct,
            hide_pickups: true,
            departure: Some("2024-03-04T08:00:00+01:00[Europe/Berlin]".parse().unwrap()),
            out: None,
        }
    }

    #[test]
    fn test_render_direct_routes() {
        let output = render_routes(&[route()], &render_args(true)).unwrap();
        let layers: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(layers[0]["vehicle"], 1);
        assert_eq!(
            layers[0]["line"]["features"][0]["geometry"]["coordinates"][3][0],
            15.0
        );
        // Pickup hidden.
        assert_eq!(layers[0]["points"]["features"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_render_without_geometry_fails() {
        assert!(render_routes(&[route()], &render_args(false)).is_err());
    }

    #[test]
    fn test_route_table_rows() {
        let departure: Zoned = "2024-03-04T08:00:00+01:00[Europe/Berlin]".parse().unwrap();
        let table = route_table(&route(), &departure).unwrap();
        let rendered = table.to_string();

        assert_eq!(table.row_count(), 4);
        assert!(rendered.contains("Pick Up: Shipment 1"));
        assert!(rendered.contains("08:10"));
        assert!(rendered.contains("Route finished"));
    }
}
