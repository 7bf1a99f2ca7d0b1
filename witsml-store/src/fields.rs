//! Per-type field readers shared by the schema versions.
//!
//! These cover the fields whose element names did not change between
//! 1.2.0 and 1.4.1.1. Anything that did change (curve layout, delimiter,
//! version-only fields) is read by the version module itself.

use witsml_model::{
    ChannelDefinition, FormationMarker, Location, Log, Message, Realtime, Refresh, Rig,
    Trajectory, TrajectoryStation, Well, Wellbore,
};

use crate::parse::{
    attr, boolean, child, children, location, number, rebuild_list, refresh_common,
    refresh_location, refresh_names, refresh_station, text, timestamp, value, CommonFields,
    Element,
};

pub(crate) fn refresh_well(well: &mut Well, element: Element<'_, '_>, common: CommonFields) {
    refresh_names(&mut well.identity, element);
    well.legal_name.refresh(text(element, "nameLegal"));
    well.field.refresh(text(element, "field"));
    well.country.refresh(text(element, "country"));
    well.state.refresh(text(element, "state"));
    well.county.refresh(text(element, "county"));
    well.region.refresh(text(element, "region"));
    well.district.refresh(text(element, "district"));
    well.block.refresh(text(element, "block"));
    well.time_zone.refresh(text(element, "timeZone"));
    well.operator.refresh(text(element, "operator"));
    well.operator_div.refresh(text(element, "operatorDiv"));
    well.status.refresh(text(element, "statusWell"));
    well.purpose.refresh(text(element, "purposeWell"));
    well.spud_date.refresh(timestamp(element, "dTimSpud"));
    well.ground_elevation.refresh(value(element, "groundElevation"));
    well.water_depth.refresh(value(element, "waterDepth"));

    let nodes: Vec<_> = children(element, "wellLocation").collect();
    if nodes.len() == 1 && well.locations.len() == 1 && attr(nodes[0], "uid").is_none() {
        // A single anonymous location refreshes the single known one.
        refresh_location(&mut well.locations[0], nodes[0]);
    } else {
        rebuild_list(
            &mut well.locations,
            nodes,
            |l: &Location| l.uid.clone(),
            |n| attr(n, "uid"),
            |l, n| {
                if l.uid.is_none() {
                    *l = location(n);
                } else {
                    refresh_location(l, n);
                }
            },
        );
    }

    refresh_common(&mut well.common_data, element, common);
}

pub(crate) fn refresh_wellbore(wellbore: &mut Wellbore, element: Element<'_, '_>, common: CommonFields) {
    refresh_names(&mut wellbore.identity, element);
    wellbore.number.refresh(text(element, "number"));
    wellbore.suffix_api.refresh(text(element, "suffixAPI"));
    wellbore.num_govt.refresh(text(element, "numGovt"));
    wellbore.status.refresh(text(element, "statusWellbore"));
    wellbore.purpose.refresh(text(element, "purposeWellbore"));
    wellbore.shape.refresh(text(element, "shape"));
    wellbore.is_active.refresh(boolean(element, "isActive"));
    wellbore.kickoff_time.refresh(timestamp(element, "dTimKickoff"));
    wellbore.md_current.refresh(value(element, "mdCurrent"));
    wellbore.tvd_current.refresh(value(element, "tvdCurrent"));
    wellbore.md_planned.refresh(value(element, "mdPlanned"));
    wellbore.tvd_planned.refresh(value(element, "tvdPlanned"));
    refresh_common(&mut wellbore.common_data, element, common);
}

/// Log header fields shared by every version. Curves and data are not
/// touched here.
pub(crate) fn refresh_log_header(log: &mut Log, element: Element<'_, '_>, common: CommonFields) {
    refresh_names(&mut log.identity, element);
    log.service_company.refresh(text(element, "serviceCompany"));
    log.run_number.refresh(text(element, "runNumber"));
    log.creation_date.refresh(timestamp(element, "creationDate"));
    log.description.refresh(text(element, "description"));
    log.object_growing.refresh(boolean(element, "objectGrowing"));
    log.index_type.refresh(text(element, "indexType"));
    log.direction.refresh(text(element, "direction"));
    log.index_curve.refresh(text(element, "indexCurve"));
    log.start_index.refresh(value(element, "startIndex"));
    log.end_index.refresh(value(element, "endIndex"));
    log.step_increment.refresh(value(element, "stepIncrement"));
    log.start_time.refresh(timestamp(element, "startDateTimeIndex"));
    log.end_time.refresh(timestamp(element, "endDateTimeIndex"));
    log.null_value.refresh(text(element, "nullValue"));
    refresh_common(&mut log.common_data, element, common);
}

pub(crate) fn refresh_trajectory(
    trajectory: &mut Trajectory,
    element: Element<'_, '_>,
    common: CommonFields,
) {
    refresh_names(&mut trajectory.identity, element);
    trajectory.service_company.refresh(text(element, "serviceCompany"));
    trajectory.definitive.refresh(boolean(element, "definitive"));
    trajectory.memory.refresh(boolean(element, "memory"));
    trajectory.final_traj.refresh(boolean(element, "finalTraj"));
    trajectory.azi_ref.refresh(text(element, "aziRef"));
    trajectory.md_min.refresh(value(element, "mdMn"));
    trajectory.md_max.refresh(value(element, "mdMx"));
    trajectory.magnetic_declination.refresh(value(element, "magDeclUsed"));
    trajectory.grid_correction.refresh(value(element, "gridCorUsed"));

    let stations: Vec<_> = children(element, "trajectoryStation").collect();
    rebuild_list(
        &mut trajectory.stations,
        stations,
        |s: &TrajectoryStation| s.uid.clone(),
        |n| attr(n, "uid"),
        |s, n| {
            s.uid.refresh(attr(n, "uid"));
            refresh_station(s, n);
        },
    );

    refresh_common(&mut trajectory.common_data, element, common);
}

pub(crate) fn refresh_message(message: &mut Message, element: Element<'_, '_>, common: CommonFields) {
    refresh_names(&mut message.identity, element);
    message.time.refresh(timestamp(element, "dTim"));
    message.md.refresh(value(element, "md"));
    message.type_message.refresh(text(element, "typeMessage"));
    message.message_text.refresh(text(element, "messageText"));
    message.severity.refresh(text(element, "severity"));
    refresh_common(&mut message.common_data, element, common);
}

pub(crate) fn refresh_rig(rig: &mut Rig, element: Element<'_, '_>, common: CommonFields) {
    refresh_names(&mut rig.identity, element);
    rig.owner.refresh(text(element, "owner"));
    rig.type_rig.refresh(text(element, "typeRig"));
    rig.manufacturer.refresh(text(element, "manufacturer"));
    rig.year_ent_service.refresh(number(element, "yearEntService"));
    rig.class_rig.refresh(text(element, "classRig"));
    rig.approvals.refresh(text(element, "approvals"));
    rig.registration.refresh(text(element, "registration"));
    rig.telephone.refresh(text(element, "telNumber"));
    rig.email.refresh(text(element, "emailAddress"));
    rig.air_gap.refresh(value(element, "airGap"));
    rig.d_tim_start_op.refresh(timestamp(element, "dTimStartOp"));
    rig.d_tim_end_op.refresh(timestamp(element, "dTimEndOp"));
    refresh_common(&mut rig.common_data, element, common);
}

pub(crate) fn refresh_formation_marker(
    marker: &mut FormationMarker,
    element: Element<'_, '_>,
    common: CommonFields,
) {
    refresh_names(&mut marker.identity, element);
    marker.md_prognosed.refresh(value(element, "mdPrognosed"));
    marker.tvd_prognosed.refresh(value(element, "tvdPrognosed"));
    marker.md_top_sample.refresh(value(element, "mdTopSample"));
    marker.tvd_top_sample.refresh(value(element, "tvdTopSample"));
    marker.thickness_bed.refresh(value(element, "thicknessBed"));
    marker.thickness_apparent.refresh(value(element, "thicknessApparent"));
    marker.dip.refresh(value(element, "dip"));
    marker.dip_direction.refresh(value(element, "dipDirection"));
    marker.lithostratigraphic.refresh(text(element, "lithostratigraphic"));
    marker.chronostratigraphic.refresh(text(element, "chronostratigraphic"));
    marker.description.refresh(text(element, "description"));
    refresh_common(&mut marker.common_data, element, common);
}

pub(crate) fn refresh_realtime(realtime: &mut Realtime, element: Element<'_, '_>) {
    refresh_names(&mut realtime.identity, element);
    realtime.d_tim.refresh(timestamp(element, "dTim"));
    realtime.md.refresh(value(element, "md"));
    realtime.sequence.refresh(number(element, "sequence"));
    realtime.active_status.refresh(text(element, "activityCode"));

    let definitions: Vec<_> = children(element, "channelDefinition").collect();
    rebuild_list(
        &mut realtime.channels,
        definitions,
        |c: &ChannelDefinition| Some(c.mnemonic.clone()).filter(|m| !m.is_empty()),
        |n| text(n, "mnemonic"),
        |c, n| {
            c.uid.refresh(attr(n, "uid"));
            if let Some(mnemonic) = text(n, "mnemonic") {
                c.mnemonic = mnemonic;
            }
            c.data_type.refresh(text(n, "dataType"));
            c.unit.refresh(text(n, "uom"));
            c.description.refresh(text(n, "description"));
        },
    );

    if let Some(channel) = child(element, "channel") {
        // The latest sample travels in a single <channel> element.
        realtime.md.refresh(value(channel, "md"));
        realtime.d_tim.refresh(timestamp(channel, "dTim"));
    }
}
