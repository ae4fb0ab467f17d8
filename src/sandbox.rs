//! The seam between a generated maze and whatever physics engine simulates it.
//!
//! The engine owns gravity, collision events and input handling; all this crate does is hand
//! it bodies and recognise the collision pair that means the ball reached the goal.

use crate::geometry::{BodyLabel, GoalRectangle, MazeGeometry, StartPoint, WallRectangle};

/// A physics world that can take the bodies of a maze.
pub trait Sandbox {
    type BodyHandle;

    fn add_static_rectangle(&mut self, wall: &WallRectangle) -> Self::BodyHandle;
    fn add_goal(&mut self, goal: &GoalRectangle) -> Self::BodyHandle;
    fn add_ball(&mut self, start: &StartPoint) -> Self::BodyHandle;
}

/// Handles of everything `populate` added.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedBodies<H> {
    pub walls: Vec<H>,
    pub goal: H,
    pub ball: H,
}

/// Add every body of `geometry` to the sandbox: walls in export order, then the goal, then the ball.
pub fn populate<S: Sandbox>(sandbox: &mut S, geometry: &MazeGeometry) -> PopulatedBodies<S::BodyHandle> {
    let walls = geometry.walls
        .iter()
        .map(|wall| sandbox.add_static_rectangle(wall))
        .collect();
    let goal = sandbox.add_goal(&geometry.goal);
    let ball = sandbox.add_ball(&geometry.start);
    PopulatedBodies { walls, goal, ball }
}

/// Does a collision between bodies labelled `a` and `b` mean the ball reached the goal?
pub fn is_goal_contact(a: BodyLabel, b: BodyLabel) -> bool {
    match (a, b) {
        (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball) => true,
        _ => false,
    }
}
