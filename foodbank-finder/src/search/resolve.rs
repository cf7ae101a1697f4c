//! Turning a user's origin into a postcode from the distance table.

use crate::domain::Postcode;
use crate::reference::ReferenceData;

use super::query::Origin;

/// Resolves an [`Origin`] to a canonical postcode.
///
/// Snapping map coordinates to the nearest postcode is the job of an
/// external service; this trait is the seam where it plugs in. Any
/// `Fn(&Origin) -> Option<Postcode>` is a resolver.
pub trait PostcodeResolver {
    /// Returns `None` when the origin is outside the service area.
    fn resolve(&self, origin: &Origin) -> Option<Postcode>;
}

impl<F> PostcodeResolver for F
where
    F: Fn(&Origin) -> Option<Postcode>,
{
    fn resolve(&self, origin: &Origin) -> Option<Postcode> {
        self(origin)
    }
}

/// Resolver that accepts typed postcodes present in the distance table.
///
/// Coordinates are declined; pair this with a snapping service to support
/// map picks.
#[derive(Debug, Clone, Copy)]
pub struct KnownPostcodes<'a> {
    data: &'a ReferenceData,
}

impl<'a> KnownPostcodes<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }
}

impl PostcodeResolver for KnownPostcodes<'_> {
    fn resolve(&self, origin: &Origin) -> Option<Postcode> {
        match origin {
            Origin::Postcode(text) => Postcode::parse(text)
                .ok()
                .filter(|postcode| self.data.knows_postcode(postcode)),
            Origin::Coordinate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistanceEntry, Foodbank, FoodbankId};

    fn data() -> ReferenceData {
        let pc = |s: &str| Postcode::parse(s).unwrap();
        ReferenceData::new(
            vec![Foodbank::new(FoodbankId(1), pc("S10 2FD"), "all")],
            vec![DistanceEntry::new(FoodbankId(1), pc("S1 1AD"), 100.0)],
        )
        .unwrap()
    }

    #[test]
    fn known_postcode_resolves() {
        let data = data();
        let resolver = KnownPostcodes::new(&data);
        assert_eq!(
            resolver.resolve(&Origin::Postcode("s1 1ad".into())),
            Some(Postcode::parse("S11AD").unwrap())
        );
    }

    #[test]
    fn unknown_or_malformed_postcode_declined() {
        let data = data();
        let resolver = KnownPostcodes::new(&data);
        assert_eq!(resolver.resolve(&Origin::Postcode("S99 9ZZ".into())), None);
        assert_eq!(resolver.resolve(&Origin::Postcode("".into())), None);
    }

    #[test]
    fn coordinates_declined() {
        let data = data();
        let resolver = KnownPostcodes::new(&data);
        let origin = Origin::Coordinate {
            lat: 53.379244,
            long: -1.470599,
        };
        assert_eq!(resolver.resolve(&origin), None);
    }

    #[test]
    fn closures_are_resolvers() {
        let snap = |origin: &Origin| match origin {
            Origin::Coordinate { .. } => Postcode::parse("S1 2HJ").ok(),
            Origin::Postcode(_) => None,
        };
        let origin = Origin::Coordinate {
            lat: 53.379244,
            long: -1.470599,
        };
        assert_eq!(snap.resolve(&origin).unwrap().as_str(), "S12HJ");
    }
}
