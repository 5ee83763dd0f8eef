use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    #[error(
        "tree bounds must be finite with positive width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error("initial node capacity must be at least 1 (capacity: {capacity})")]
    InvalidCapacity { capacity: usize },
    #[error("config field `{field}` must be finite and non-negative (value: {value})")]
    InvalidConfig { field: &'static str, value: f32 },
    #[error("point coordinates must be finite (x: {x}, y: {y})")]
    NonFinitePoint { x: f32, y: f32 },
    #[error("point mass must be finite and positive (mass: {mass})")]
    InvalidMass { mass: f32 },
    #[error("point must lie within the tree bounds (x: {x}, y: {y})")]
    PointOutOfBounds { x: f32, y: f32 },
    #[error("force parameter `{name}` must be finite (value: {value})")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("no resident body with id {body}")]
    UnknownBody { body: u32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
