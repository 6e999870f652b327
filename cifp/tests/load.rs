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

use cifp::geom::{Course, MagneticVariation};
use cifp::nd::{AiracCycle, NavaidKind};
use cifp::procedure::{Endpoint, ProcedureKind};
use cifp::{coord, Cifp, Error, LoadOptions};

const CIFP_DATA: &[u8] = b"\
SUSAD        ABQ   K2111320VTHW N35023760W106480980ABQ N35023760W106480980E013005740      NARALBUQUERQUE                   123452313
SUSADB       GO    K2003650H  W N35023760W106480980                       E0100           NARGOLDEN                        123462313
SUSAP KABQK2IIABQ1   011090RW08 N35022000W1063500000794N35023000W106370000         0500300E0130                            123472313
SUSAP KABQK2AABQ     0     145YHN35022000W106365000E012005355         1800018000C    MNAR    ALBUQUERQUE INTL SUNPORT      300672313
SUSAP KABQK2GRW08    0120790790 N35022000W106370000         -0028300012046057200IIABQ1                                     305542313
SUSAP KABQK2GRW26    0120792590 N35022000W106340000         -0028300012046057200I                                          305542313
SUSAPCKABQK2 ALISS K20    V     N35030000W106300000                                 WGE           ALISS                    122922313
SUSAEAENRT   AAARG K 0    W   B N32413827W078030466                       W0093     NAR           AAARG                    270862313
SUSAP KABQK2DABQ1  4RW08  010ALISSK2PC1E  FR   CF ABQ K2      0800012007940050D   + 07000          210               -     123492313
SUSAER       V12         0010ABQ  K2D 0V  B OL    ABQ K2              091001202710 070000800017999                         123482313
SUSAER       V12         0020ALISSK2D 0V  B OL    ABQ K2              091001202710 070000800017999                         123482313
SUSAAS       N35W107          045UNK120120120120120120120120120120120120120120120120120120120120120120120120120120120120   123512313
SUSAUFKZABKZABF00101KZLA        G N35023760W106480980                           FL180             ALBUQUERQUE              123502313
SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676062312
";

fn load() -> Cifp {
    Cifp::load(CIFP_DATA).expect("test data should load")
}

#[test]
fn loads_aerodromes_and_runways() {
    let cifp = load();

    let kabq = cifp.aerodrome("KABQ").expect("KABQ should be loaded");
    assert_eq!(kabq.name, "ALBUQUERQUE INTL SUNPORT");
    assert_eq!(kabq.iata.as_deref(), Some("ABQ"));
    assert_eq!(kabq.elevation, 5355);
    // the localizer is the nearest navaid
    assert_eq!(kabq.variation, Some(MagneticVariation::East(13.0)));

    let rw08 = cifp.runway("KABQ", "08").expect("RW08 should be loaded");
    assert_eq!(
        rw08.bearing,
        Course::Magnetic {
            degrees: 79.0,
            variation: Some(MagneticVariation::East(13.0)),
        }
    );
    assert_eq!(rw08.ils.as_deref(), Some("IABQ"));

    let rw26 = cifp
        .opposite_runway(rw08)
        .expect("RW26 should be the opposite runway");
    assert_eq!(rw26.designator, "26");
}

#[test]
fn loads_navaids() {
    let cifp = load();

    let abq = cifp.navaids("ABQ");
    assert_eq!(abq.len(), 1);
    assert!(abq[0].is_vor());
    assert!(abq[0].has_dme());

    let iabq = cifp.navaids("IABQ");
    assert_eq!(iabq.len(), 1);
    assert!(matches!(
        &iabq[0].kind,
        NavaidKind::Ils { runway, .. } if runway == "08"
    ));

    assert_eq!(cifp.navaids("GO").len(), 1);
    assert_eq!(cifp.fixes("ALISS").len(), 1);
    assert_eq!(cifp.fixes("AAARG").len(), 1);
}

#[test]
fn assembles_procedures() {
    let cifp = load();

    let sid = cifp
        .procedure("KABQ", "ABQ1")
        .expect("ABQ1 should be assembled");
    assert_eq!(sid.kind, ProcedureKind::Sid);

    let route = sid
        .select_route(Some("RW08"), None)
        .expect("RW08 transition should exist");
    assert_eq!(route.len(), 1);
    assert!(route[0].is_resolved());
    assert_eq!(
        route[0].endpoint.as_ref().map(Endpoint::ident).as_deref(),
        Some("ALISS")
    );
}

#[test]
fn assembles_airways() {
    let cifp = load();

    let v12 = cifp.airways("V12");
    assert_eq!(v12.len(), 1);
    assert_eq!(v12[0].fixes().collect::<Vec<_>>(), vec!["ABQ", "ALISS"]);
}

#[test]
fn loads_grid_mora() {
    let cifp = load();

    assert_eq!(cifp.mora_at(&coord!(35.5, -106.9)), Some(4500));
    assert_eq!(cifp.mora_at(&coord!(35.5, -105.5)), None);
    assert_eq!(cifp.mora_at(&coord!(35.5, -104.5)), Some(12000));
}

#[test]
fn loads_airspaces_and_firs() {
    let cifp = load();

    let airspaces = cifp.airspaces_at(&coord!(40.6917, -74.1639));
    assert_eq!(airspaces.len(), 1);
    assert_eq!(airspaces[0].name, "NEW YORK AREA A");
    assert!(cifp.airspaces_at(&coord!(40.9, -73.5)).is_empty());

    assert_eq!(cifp.fir("KZAB").len(), 1);
    assert_eq!(cifp.neighbours("KZAB"), vec!["KZLA"]);
}

#[test]
fn keeps_oldest_cycle() {
    assert_eq!(load().cycle(), Some(AiracCycle::new(23, 12)));
}

#[test]
fn filters_airports() {
    let options = LoadOptions::default().airports(["KJFK"]);
    let cifp = Cifp::load_with(CIFP_DATA, &options).expect("test data should load");

    assert!(cifp.aerodrome("KABQ").is_some());
    assert!(cifp.procedures("KABQ").is_empty());
    assert!(cifp.runways("KABQ").is_empty());
    assert!(cifp.navaids("IABQ").is_empty());
    assert_eq!(cifp.airways("V12").len(), 1);
}

#[test]
fn serial_and_parallel_loads_agree() {
    let parallel = load();
    let serial = Cifp::load_with(CIFP_DATA, &LoadOptions::default().parallel(false))
        .expect("test data should load");

    assert_eq!(serial.procedures("KABQ"), parallel.procedures("KABQ"));
    assert_eq!(serial.airways("V12"), parallel.airways("V12"));
    assert_eq!(serial.airspaces(), parallel.airspaces());
    assert_eq!(serial.cycle(), parallel.cycle());
}

#[test]
fn rejects_corrupt_records() {
    let mut data = CIFP_DATA.to_vec();
    let airspace = data
        .windows(8)
        .position(|w| w == b"SUSAUCK6")
        .expect("test data should contain an airspace");
    data[airspace + 32] = b'X';

    assert!(matches!(Cifp::load(&data), Err(Error::Format { .. })));
}
