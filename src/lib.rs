//! Automatic orthogonal routing for diagram connectors.
//!
//! Given the two ends of a connector, each optionally attached to an object
//! through a [`ConnectionPoint`], [`route`] picks exit directions and a
//! polyline of horizontal and vertical segments that keeps clear of both
//! objects while staying short and simple.
//!
//! ```
//! use glam::dvec2;
//! use orthoroute::{Direction, OrthConn, Rect, RectAnchor, autoroute};
//!
//! let a = RectAnchor::new(Rect::new(0.0, 0.0, 4.0, 2.0));
//! let b = RectAnchor::new(Rect::new(10.0, 6.0, 14.0, 8.0));
//! let start = a.side_point(Direction::East);
//! let end = b.side_point(Direction::West);
//!
//! let mut conn = OrthConn::new(vec![start.pos, end.pos])?;
//! assert!(autoroute(&mut conn, Some(&start), Some(&end)));
//! assert_eq!(conn.points().len(), 4);
//! # Ok::<(), orthoroute::RouteError>(())
//! ```

pub mod anchor;
pub mod direction;
pub mod errors;
pub mod log;
pub mod orthconn;
pub mod route;
pub mod types;

pub use anchor::{Anchor, ConnectionPoint, EllipseAnchor, RectAnchor};
pub use direction::{Direction, DirectionSet};
pub use errors::{ConfigError, RouteError};
pub use orthconn::{OrthConn, OrthConnector, autoroute, autoroute_with};
pub use route::{Endpoint, ExtraSpacing, Route, RouteConfig, RouteRequest, route};
pub use types::{NumericError, Orientation, Point, Rect};
