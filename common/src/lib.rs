pub mod config;
pub mod constants;
pub mod maze;
pub mod orientation;
pub mod position;
pub mod solving;

pub use maze::{Algorithm, Markers, Maze, MazeError};
pub use orientation::Orientation;
pub use position::Position;
pub use solving::{
    AnnotationLog, Annotator, Marker, MazeModel, NoAnnotation, Solution, SolveError, SolveStats,
    WallFollower,
};
