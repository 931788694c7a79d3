//! Evaluation of a scenario against the geometry kernel.
//!
//! Every unit is turned into a trajectory over the probe horizon, then checked
//! against the arena, the other units and the obstacles.

use anyhow::Context;
use tracing::{debug, info, warn};
use vantage_geometry::{Line, Point, Rect, Side};

use crate::config::Settings;

/// Where a unit ends up after the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitReport {
    pub name: String,
    pub trajectory: Line,
    /// Whether the end of the trajectory is still inside the arena.
    pub inside_arena: bool,
    /// Signed distance of the end point to the nearer arena bound, per axis.
    pub bound_distance: (f64, f64),
}

/// How a unit's trajectory meets an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// The unit starts inside the obstacle.
    Inside,
    /// The trajectory crosses the obstacle's `side` at `point`.
    Crossing { side: Side, point: Point },
}

/// A unit trajectory meeting an obstacle.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFinding {
    pub unit: String,
    pub obstacle: String,
    pub contact: Contact,
}

/// Two obstacles sharing a non-empty area.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapFinding {
    pub first: String,
    pub second: String,
    pub overlap: Rect,
}

/// Everything found in one evaluation, in scenario order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub units: Vec<UnitReport>,
    /// Pairs of units colliding within the horizon.
    pub collisions: Vec<(String, String)>,
    pub contacts: Vec<ContactFinding>,
    pub overlaps: Vec<OverlapFinding>,
}

/// Run every query of the probe over `settings`.
pub fn evaluate(settings: &Settings) -> anyhow::Result<Report> {
    let arena = settings.arena.rect();
    let mut report = Report::default();

    for unit in &settings.units {
        let trajectory = unit
            .motion
            .trajectory(unit.position, settings.probe.horizon)
            .with_context(|| format!("cannot build trajectory of unit {:?}", unit.name))?;
        let end = trajectory.to;
        debug!(unit = %unit.name, %trajectory, motion = %unit.motion, "Built trajectory");

        report.units.push(UnitReport {
            name: unit.name.clone(),
            trajectory,
            inside_arena: arena.contains_point(&end),
            bound_distance: (
                end.distance_to_x_bound(settings.arena.width),
                end.distance_to_y_bound(settings.arena.height),
            ),
        });
    }

    for (i, a) in report.units.iter().enumerate() {
        for b in &report.units[i + 1..] {
            if a.trajectory.is_collision(&b.trajectory, settings.probe.collision_radius) {
                report.collisions.push((a.name.clone(), b.name.clone()));
            }
        }
    }

    for unit in &report.units {
        for obstacle in &settings.obstacles {
            if let Some(contact) = contact(&unit.trajectory, &obstacle.bounds) {
                report.contacts.push(ContactFinding {
                    unit: unit.name.clone(),
                    obstacle: obstacle.name.clone(),
                    contact,
                });
            }
        }
    }

    for (i, a) in settings.obstacles.iter().enumerate() {
        for b in &settings.obstacles[i + 1..] {
            if let Some(overlap) = a.bounds.intersection(&b.bounds) {
                report.overlaps.push(OverlapFinding {
                    first: a.name.clone(),
                    second: b.name.clone(),
                    overlap,
                });
            }
        }
    }

    Ok(report)
}

/// The first edge of `obstacle` hit along `trajectory`. Ties go to the earlier
/// side in [`Side::ALL`] order, which happens when a corner is hit.
fn contact(trajectory: &Line, obstacle: &Rect) -> Option<Contact> {
    if obstacle.contains_point(&trajectory.from) {
        return Some(Contact::Inside);
    }
    Side::ALL
        .into_iter()
        .filter_map(|side| {
            trajectory
                .segments_intersection(&obstacle.edge(side))
                .map(|point| (side, point))
        })
        .min_by(|(_, p), (_, q)| {
            trajectory
                .from
                .distance(p)
                .total_cmp(&trajectory.from.distance(q))
        })
        .map(|(side, point)| Contact::Crossing { side, point })
}

impl Report {
    /// Emit the findings as structured log events.
    pub fn log(&self) {
        for unit in &self.units {
            let (dx, dy) = unit.bound_distance;
            if unit.inside_arena {
                info!(unit = %unit.name, trajectory = %unit.trajectory, bound_x = dx, bound_y = dy, "Unit stays in the arena");
            } else {
                warn!(unit = %unit.name, trajectory = %unit.trajectory, bound_x = dx, bound_y = dy, "Unit leaves the arena");
            }
        }
        for (a, b) in &self.collisions {
            warn!(first = %a, second = %b, "Collision within the horizon");
        }
        for finding in &self.contacts {
            match finding.contact {
                Contact::Inside => {
                    warn!(unit = %finding.unit, obstacle = %finding.obstacle, "Unit starts inside an obstacle")
                }
                Contact::Crossing { side, point } => {
                    warn!(unit = %finding.unit, obstacle = %finding.obstacle, ?side, %point, "Trajectory hits an obstacle")
                }
            }
        }
        for finding in &self.overlaps {
            info!(first = %finding.first, second = %finding.second, overlap = %finding.overlap, "Obstacles overlap");
        }
        info!(
            units = self.units.len(),
            collisions = self.collisions.len(),
            contacts = self.contacts.len(),
            overlaps = self.overlaps.len(),
            "Scenario evaluated"
        );
    }
}
