//! WITSML 1.2.0. No formation markers; `commonData` has no service
//! category and logs do not report `objectGrowing`.

use roxmltree::Node;
use std::sync::LazyLock;
use witsml_model::{BulkDecoder, WitsmlObject};
use witsml_types::{ObjectType, WitsmlVersion};

use super::{check_target, document, update_indexed_curves};
use crate::error::{StoreError, StoreResult};
use crate::fields;
use crate::parse::CommonFields;
use crate::registry::ObjectCodec;

const VERSION: WitsmlVersion = WitsmlVersion::V1_2_0;

const COMMON: CommonFields = CommonFields {
    service_category: false,
    time_zone_and_datum: false,
};

const COMMON_DATA: &str = "<commonData><sourceName/><dTimCreation/><dTimLastChange/>\
<itemState/><comments/></commonData>";

const LOCATION: &str = r#"<wellLocation uid=""><wellCRS uidRef=""/><latitude uom="%uom:angle%"/><longitude uom="%uom:angle%"/><easting uom="%uom:length%"/><northing uom="%uom:length%"/><description/></wellLocation>"#;

const LOG_CURVE_INFO: &str = r#"<logCurveInfo uid=""><mnemonic/><classWitsml/><unit/><nullValue/><minIndex uom=""/><maxIndex uom=""/><minDateTimeIndex/><maxDateTimeIndex/><columnIndex/><curveDescription/><typeLogData/></logCurveInfo>"#;

const TRAJECTORY_STATION: &str = r#"<trajectoryStation uid=""><dTimStn/><typeTrajStation/><md uom="%uom:length%"/><tvd uom="%uom:length%"/><incl uom="%uom:angle%"/><azi uom="%uom:angle%"/><dispNs uom="%uom:length%"/><dispEw uom="%uom:length%"/><dls uom="%uom:dls%"/></trajectoryStation>"#;

const CHANNEL_DEFINITION: &str = r#"<channelDefinition uid=""><mnemonic/><dataType/><uom/><description/></channelDefinition>"#;

const WELLBORE_CHILD: &str = r#"uidWell="%parent.1%" uidWellbore="%parent.0%" uid="%uid%""#;

static WELL: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Well,
        &format!(
            r#"<well uid="%uid%"><name/><nameLegal/><field/><country/><state/><county/><region/><district/><block/><timeZone/><operator/><operatorDiv/><statusWell/><purposeWell/><dTimSpud/><groundElevation uom="%uom:length%"/><waterDepth uom="%uom:length%"/>{LOCATION}{COMMON_DATA}</well>"#
        ),
    )
});

static WELLBORE: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Wellbore,
        &format!(
            r#"<wellbore uidWell="%parent.0%" uid="%uid%"><nameWell/><name/><number/><suffixAPI/><numGovt/><statusWellbore/><purposeWellbore/><shape/><dTimKickoff/><mdCurrent uom="%uom:length%"/><tvdCurrent uom="%uom:length%"/><mdPlanned uom="%uom:length%"/><tvdPlanned uom="%uom:length%"/>{COMMON_DATA}</wellbore>"#
        ),
    )
});

static LOG: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Log,
        &format!(
            r#"<log {WELLBORE_CHILD}><nameWell/><nameWellbore/><name/><serviceCompany/><runNumber/><creationDate/><description/><indexType/><startIndex uom=""/><endIndex uom=""/><stepIncrement uom=""/><startDateTimeIndex/><endDateTimeIndex/><direction/><indexCurve columnIndex=""/><nullValue/>{LOG_CURVE_INFO}<logData><data/></logData>{COMMON_DATA}</log>"#
        ),
    )
});

static TRAJECTORY: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Trajectory,
        &format!(
            r#"<trajectory {WELLBORE_CHILD}><nameWell/><nameWellbore/><name/><mdMn uom="%uom:length%"/><mdMx uom="%uom:length%"/><serviceCompany/><magDeclUsed uom="%uom:angle%"/><gridCorUsed uom="%uom:angle%"/><aziRef/><definitive/><memory/><finalTraj/>{TRAJECTORY_STATION}{COMMON_DATA}</trajectory>"#
        ),
    )
});

static MESSAGE: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Message,
        &format!(
            r#"<message {WELLBORE_CHILD}><nameWell/><nameWellbore/><name/><dTim/><md uom="%uom:length%"/><typeMessage/><messageText/><severity/>{COMMON_DATA}</message>"#
        ),
    )
});

static REALTIME: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Realtime,
        &format!(
            r#"<realtime {WELLBORE_CHILD}><nameWell/><nameWellbore/><dTim/><md uom="%uom:length%"/><sequence/><activityCode/>{CHANNEL_DEFINITION}</realtime>"#
        ),
    )
});

static RIG: LazyLock<String> = LazyLock::new(|| {
    document(
        VERSION,
        ObjectType::Rig,
        &format!(
            r#"<rig {WELLBORE_CHILD}><nameWell/><nameWellbore/><name/><owner/><typeRig/><manufacturer/><yearEntService/><classRig/><approvals/><registration/><telNumber/><emailAddress/><airGap uom="%uom:length%"/><dTimStartOp/><dTimEndOp/>{COMMON_DATA}</rig>"#
        ),
    )
});

struct Codec {
    object_type: ObjectType,
    skeleton: &'static LazyLock<String>,
}

impl ObjectCodec for Codec {
    fn version(&self) -> WitsmlVersion {
        VERSION
    }

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn skeleton(&self) -> &'static str {
        self.skeleton.as_str()
    }

    fn update(
        &self,
        object: &mut WitsmlObject,
        element: Node<'_, '_>,
        decoder: &BulkDecoder,
    ) -> StoreResult<()> {
        check_target(VERSION, self.object_type, object, element)?;
        match object {
            WitsmlObject::Well(well) => fields::refresh_well(well, element, COMMON),
            WitsmlObject::Wellbore(wellbore) => fields::refresh_wellbore(wellbore, element, COMMON),
            WitsmlObject::Log(log) => {
                fields::refresh_log_header(log, element, COMMON);
                update_indexed_curves(log, element, decoder)?;
            }
            WitsmlObject::Trajectory(trajectory) => {
                fields::refresh_trajectory(trajectory, element, COMMON)
            }
            WitsmlObject::Message(message) => fields::refresh_message(message, element, COMMON),
            WitsmlObject::Realtime(realtime) => fields::refresh_realtime(realtime, element),
            WitsmlObject::Rig(rig) => fields::refresh_rig(rig, element, COMMON),
            WitsmlObject::FormationMarker(_) => {
                return Err(StoreError::TemplateResolution {
                    version: VERSION,
                    object_type: ObjectType::FormationMarker,
                });
            }
        }
        Ok(())
    }
}

static WELL_CODEC: Codec = Codec {
    object_type: ObjectType::Well,
    skeleton: &WELL,
};
static WELLBORE_CODEC: Codec = Codec {
    object_type: ObjectType::Wellbore,
    skeleton: &WELLBORE,
};
static LOG_CODEC: Codec = Codec {
    object_type: ObjectType::Log,
    skeleton: &LOG,
};
static TRAJECTORY_CODEC: Codec = Codec {
    object_type: ObjectType::Trajectory,
    skeleton: &TRAJECTORY,
};
static MESSAGE_CODEC: Codec = Codec {
    object_type: ObjectType::Message,
    skeleton: &MESSAGE,
};
static REALTIME_CODEC: Codec = Codec {
    object_type: ObjectType::Realtime,
    skeleton: &REALTIME,
};
static RIG_CODEC: Codec = Codec {
    object_type: ObjectType::Rig,
    skeleton: &RIG,
};
pub(crate) fn codec(object_type: ObjectType) -> Option<&'static dyn ObjectCodec> {
    let codec: &'static dyn ObjectCodec = match object_type {
        ObjectType::FormationMarker => return None,
        ObjectType::Well => &WELL_CODEC,
        ObjectType::Wellbore => &WELLBORE_CODEC,
        ObjectType::Log => &LOG_CODEC,
        ObjectType::Trajectory => &TRAJECTORY_CODEC,
        ObjectType::Message => &MESSAGE_CODEC,
        ObjectType::Realtime => &REALTIME_CODEC,
        ObjectType::Rig => &RIG_CODEC,
    };
    Some(codec)
}
