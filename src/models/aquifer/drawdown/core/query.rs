//! Query points and broadcast evaluation.

use uom::si::{
    f64::{Length, Time, VolumeRate},
    length::meter,
    time::second,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    broadcast::{Broadcast, zip3},
    constraint::ConstraintError,
};

use super::{DrawdownError, params::positive_finite};

/// Flow rates, radial distances, and elapsed times to evaluate.
///
/// Each argument is a scalar or a sequence.
/// Sequences in the same query must share one length.
#[derive(Debug, Clone, PartialEq)]
pub struct WellTestQuery {
    /// Well flow rate. Positive for extraction, negative for injection.
    pub q: Broadcast<VolumeRate>,

    /// Radial distance from the pumping well.
    pub r: Broadcast<Length>,

    /// Elapsed time since pumping started.
    pub t: Broadcast<Time>,
}

impl WellTestQuery {
    /// Creates a query from scalar or sequence arguments.
    pub fn new(
        q: impl Into<Broadcast<VolumeRate>>,
        r: impl Into<Broadcast<Length>>,
        t: impl Into<Broadcast<Time>>,
    ) -> Self {
        Self {
            q: q.into(),
            r: r.into(),
            t: t.into(),
        }
    }

    /// Broadcasts the arguments and validates every resulting point.
    ///
    /// # Errors
    ///
    /// Returns [`DrawdownError::ShapeMismatch`] if sequence lengths differ,
    /// or [`DrawdownError::Domain`] for the first invalid point.
    pub fn points(self) -> Result<Broadcast<QueryPoint>, DrawdownError> {
        let mut index = 0;
        zip3(self.q, self.r, self.t)?.try_map(|(q, r, t)| {
            let point = QueryPoint::checked(index, q, r, t);
            index += 1;
            point
        })
    }
}

/// A single validated `(q, r, t)` evaluation point.
///
/// The flow rate is finite; radial distance and elapsed time are strictly
/// positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    q: VolumeRate,
    r: Length,
    t: Time,
}

impl QueryPoint {
    /// Constructs a validated query point.
    ///
    /// # Errors
    ///
    /// Returns [`DrawdownError::Domain`] (with index 0) if a value is out of domain.
    pub fn new(q: VolumeRate, r: Length, t: Time) -> Result<Self, DrawdownError> {
        Self::checked(0, q, r, t)
    }

    fn checked(index: usize, q: VolumeRate, r: Length, t: Time) -> Result<Self, DrawdownError> {
        let domain = move |name: &'static str| {
            move |source: ConstraintError| DrawdownError::Domain {
                name,
                index,
                source,
            }
        };

        let rate = q.get::<cubic_meter_per_second>();
        if rate.is_nan() {
            return Err(domain("flow rate")(ConstraintError::NotANumber));
        }
        if !rate.is_finite() {
            return Err(domain("flow rate")(ConstraintError::NotFinite));
        }

        let r = positive_finite(r, r.get::<meter>()).map_err(domain("radial distance"))?;
        let t = positive_finite(t, t.get::<second>()).map_err(domain("elapsed time"))?;

        Ok(Self { q, r, t })
    }

    /// Returns the same point observed at another radial distance.
    ///
    /// The caller must ensure `r` is strictly positive and finite.
    pub(super) fn at_radius_unchecked(self, r: Length) -> Self {
        Self { r, ..self }
    }

    /// Returns the flow rate.
    #[must_use]
    pub fn q(&self) -> VolumeRate {
        self.q
    }

    /// Returns the radial distance.
    #[must_use]
    pub fn r(&self) -> Length {
        self.r
    }

    /// Returns the elapsed time.
    #[must_use]
    pub fn t(&self) -> Time {
        self.t
    }
}

/// Validates a query, runs `check` on every point, then evaluates `drawdown`.
///
/// No drawdown is computed unless every point passes.
pub(super) fn evaluate(
    query: WellTestQuery,
    check: impl Fn(usize, &QueryPoint) -> Result<(), DrawdownError>,
    drawdown: impl Fn(&QueryPoint) -> Length,
) -> Result<Broadcast<Length>, DrawdownError> {
    let points = query.points()?;

    for (index, point) in points.iter().enumerate() {
        check(index, point)?;
    }

    Ok(points.map(|point| drawdown(&point)))
}
