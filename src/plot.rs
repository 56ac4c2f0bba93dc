use std::io::Write;

use log::{debug, info};

use crate::canvas::{Canvas, PlotLayout};
use crate::config::InputConfig;
use crate::error::Result;
use crate::robot::RobotData;

/// Draws one robot and reports its rotation radius on `out`.
pub fn plot_robot<C: Canvas + ?Sized, W: Write>(
    canvas: &mut C,
    robot: &RobotData,
    out: &mut W,
) -> Result<()> {
    debug!("Plotting robot [{}] at {:?}", robot.name, robot.pose);

    canvas.draw_point_label(robot.pose.position(), &robot.center_label())?;
    canvas.draw_polyline(&robot.shape.closed_outline())?;
    canvas.draw_polyline(&robot.shape.closed_heading())?;
    canvas.draw_dashed_circle(robot.pose.position(), robot.rotation_radius())?;

    writeln!(
        out,
        "Rotation radius of robot [{}]: {} m",
        robot.name,
        robot.rotation_radius_text()
    )?;
    Ok(())
}

pub fn plot_robots<C: Canvas + ?Sized, W: Write>(
    canvas: &mut C,
    robots: &[RobotData],
    out: &mut W,
) -> Result<()> {
    for robot in robots {
        plot_robot(canvas, robot, out)?;
    }
    Ok(())
}

/// Plots every robot in `config` and shows the finished chart once.
pub fn run<C: Canvas + ?Sized>(config: &InputConfig, canvas: &mut C) -> Result<()> {
    let robots = config.robots();
    info!("Loaded {} robots", robots.len());

    let stdout = std::io::stdout();
    plot_robots(canvas, &robots, &mut stdout.lock())?;
    canvas.show(&PlotLayout::default())
}
