// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use arinc424::records;

use super::fields::{character, coordinate, optional_coordinate, text};
use crate::geom::Course;
use crate::nd::{
    Aerodrome, AerodromeKind, Dme, GlideSlope, GridMora, Navaid, NavaidKind, Runway, Usage, Waypoint,
};

fn missing(field: &'static str, bytes: &[u8]) -> arinc424::Error {
    arinc424::Error::InvalidVariant {
        field,
        bytes: bytes.to_vec(),
        expected: "a coordinate",
    }
}

impl<'a> TryFrom<records::Waypoint<'a>> for Waypoint {
    type Error = arinc424::Error;

    fn try_from(wp: records::Waypoint) -> Result<Self, Self::Error> {
        Ok(Waypoint {
            ident: wp.fix_ident.to_string(),
            name: text(wp.name_desc).unwrap_or_default(),
            icao_code: wp.icao_code()?.to_string(),
            usage: wp.waypoint_usage.into(),
            region: wp.regn_code.into(),
            coordinate: coordinate(wp.latitude, wp.longitude)?,
            variation: wp.mag_var.map(Into::into),
        })
    }
}

impl<'a> TryFrom<records::VhfNavaid<'a>> for Navaid {
    type Error = arinc424::Error;

    /// Converts a VOR with an optional collocated DME, or a standalone DME
    /// which carries itself as DME.
    fn try_from(vhf: records::VhfNavaid) -> Result<Self, Self::Error> {
        let station = optional_coordinate(vhf.latitude, vhf.longitude)?;
        let dme = optional_coordinate(vhf.dme_latitude, vhf.dme_longitude)?;
        let elevation = vhf.dme_elevation.map(|e| e.as_feet()).transpose()?;
        let ident = vhf.vor_ident.to_string();

        let (kind, coordinate, dme) = match (vhf.class.is_vor(), station, dme) {
            (true, Some(station), dme) => (
                NavaidKind::Vor,
                station,
                vhf.class.has_dme().then(|| Dme {
                    ident: vhf.dme_ident.map_or_else(|| ident.clone(), |i| i.to_string()),
                    coordinate: dme.unwrap_or(station),
                    elevation,
                }),
            ),
            (false, _, Some(dme)) | (false, Some(dme), None) => (
                NavaidKind::Dme,
                dme,
                Some(Dme {
                    ident: ident.clone(),
                    coordinate: dme,
                    elevation,
                }),
            ),
            _ => return Err(missing("VOR Latitude", vhf.vor_ident.as_bytes())),
        };

        Ok(Navaid {
            ident,
            kind,
            name: text(vhf.vor_name).unwrap_or_default(),
            icao_code: vhf.icao_code.to_string(),
            airport: vhf.arpt_ident.and_then(text),
            frequency: vhf.frequency.as_mhz()?,
            coordinate,
            variation: vhf.station_declination.map(Into::into),
            dme,
        })
    }
}

impl<'a> TryFrom<records::NdbNavaid<'a>> for Navaid {
    type Error = arinc424::Error;

    fn try_from(ndb: records::NdbNavaid) -> Result<Self, Self::Error> {
        Ok(Navaid {
            ident: ndb.ndb_ident.to_string(),
            kind: NavaidKind::Ndb,
            name: text(ndb.ndb_name).unwrap_or_default(),
            icao_code: ndb.icao_code.to_string(),
            airport: ndb.arpt_ident.and_then(text),
            frequency: ndb.frequency.as_khz()?,
            coordinate: coordinate(ndb.latitude, ndb.longitude)?,
            variation: ndb.mag_var.map(Into::into),
            dme: None,
        })
    }
}

impl<'a> TryFrom<records::Localizer<'a>> for Navaid {
    type Error = arinc424::Error;

    /// Converts a localizer with its glide slope.
    fn try_from(loc: records::Localizer) -> Result<Self, Self::Error> {
        let variation = loc.station_declination.map(Into::into);
        let runway = loc.runway_id.designator()?.to_string();

        let glide_slope = match optional_coordinate(loc.gs_latitude, loc.gs_longitude)? {
            Some(coordinate) => Some(GlideSlope {
                coordinate,
                angle: loc
                    .gs_angle
                    .map(|angle| angle.as_u16())
                    .transpose()?
                    .map_or(0.0, |angle| angle as f64 / 100.0),
            }),
            None => None,
        };

        Ok(Navaid {
            ident: loc.loc_ident.to_string(),
            name: format!("{} RW{runway}", loc.arpt_ident),
            kind: NavaidKind::Ils {
                runway,
                bearing: Course::from(loc.loc_brg).with_variation(variation),
                category: loc.ils_category.and_then(character),
                glide_slope,
            },
            icao_code: loc.icao_code.to_string(),
            airport: Some(loc.arpt_ident.to_string()),
            frequency: loc.frequency.as_mhz()?,
            coordinate: coordinate(loc.loc_latitude, loc.loc_longitude)?,
            variation,
            dme: None,
        })
    }
}

impl<'a> TryFrom<records::Runway<'a>> for Runway {
    type Error = arinc424::Error;

    fn try_from(rwy: records::Runway) -> Result<Self, Self::Error> {
        Ok(Runway {
            airport: rwy.arpt_ident.to_string(),
            designator: rwy.runway_id.designator()?.to_string(),
            length: rwy.runway_length.as_u32()?,
            width: rwy.width.map(|w| w.as_u16()).transpose()?.map(u32::from),
            bearing: rwy.rwy_brg.into(),
            threshold: coordinate(rwy.threshold_latitude, rwy.threshold_longitude)?,
            threshold_elevation: rwy.threshold_elevation.map(|e| e.as_feet()).transpose()?,
            displaced_threshold: rwy
                .displaced_threshold
                .map(|d| d.as_u32())
                .transpose()?
                .unwrap_or_default(),
            ils: rwy.loc_ident.and_then(text),
            ils_category: rwy.ils_category.and_then(character),
        })
    }
}

impl<'a> TryFrom<records::Airport<'a>> for Aerodrome {
    type Error = arinc424::Error;

    fn try_from(arpt: records::Airport) -> Result<Self, Self::Error> {
        Ok(Aerodrome {
            ident: arpt.arpt_ident.to_string(),
            icao_code: arpt.icao_code.to_string(),
            iata: text(arpt.iata),
            kind: if arpt.is_heliport() {
                AerodromeKind::Heliport
            } else {
                AerodromeKind::Airport
            },
            name: text(arpt.airport_name).unwrap_or_default(),
            coordinate: coordinate(arpt.latitude, arpt.longitude)?,
            elevation: arpt.elevation.as_feet()?,
            variation: arpt.mag_var.map(Into::into),
            transition_altitude: arpt.transition_altitude.map(|a| a.as_u32()).transpose()?,
            transition_level: arpt.transition_level.map(|l| l.as_u32()).transpose()?,
            usage: match arpt.public_military.first() {
                b'M' => Usage::Military,
                b'J' => Usage::Joint,
                b'P' => Usage::Private,
                _ => Usage::Civil,
            },
            ifr: arpt.ifr.first() == b'Y',
            longest_runway: arpt
                .longest_rwy
                .map(|l| l.as_u16())
                .transpose()?
                .map(|hundreds| hundreds as u32 * 100),
        })
    }
}

impl<'a> TryFrom<records::GridMora<'a>> for GridMora {
    type Error = arinc424::Error;

    fn try_from(mora: records::GridMora) -> Result<Self, Self::Error> {
        Ok(GridMora {
            latitude: mora.start_latitude.as_degrees()?,
            longitude: mora.start_longitude.as_degrees()?,
            values: (0..GridMora::CELLS)
                .map(|i| mora.mora.get(i))
                .collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::MagneticVariation;

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";

    #[test]
    fn converts_airport() {
        let record = records::Airport::try_from(AIRPORT).expect("airport should parse");
        let arpt = Aerodrome::try_from(record).expect("airport should convert");

        assert_eq!(arpt.ident, "KJFK");
        assert_eq!(arpt.iata.as_deref(), Some("JFK"));
        assert_eq!(arpt.kind, AerodromeKind::Airport);
        assert_eq!(arpt.name, "JOHN F KENNEDY INTL");
        assert_eq!(arpt.elevation, 13);
        assert_eq!(arpt.variation, Some(MagneticVariation::West(13.0)));
        assert_eq!(arpt.transition_altitude, Some(18000));
        assert_eq!(arpt.longest_runway, Some(14500));
        assert_eq!(arpt.usage, Usage::Civil);
        assert!(arpt.ifr);
    }
}
