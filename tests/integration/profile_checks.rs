use anyhow::Result;
use athleteprofile::profile::{
    check_descriptor, load_descriptor, parse_descriptor, DescriptorFormat, IssueKind,
    IssueSeverity,
};
use athleteprofile::CheckSettings;

use super::sample_descriptor_path;
use crate::support::descriptor::{sample_value, to_raw};

#[test]
fn sample_passes_all_checks() -> Result<()> {
    let descriptor = load_descriptor(sample_descriptor_path())?;
    let report = check_descriptor(&descriptor, &CheckSettings::default());
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.warnings().count(), 0);
    Ok(())
}

#[test]
fn every_bad_field_is_located() -> Result<()> {
    let mut value = sample_value();
    value["photos"][1]["caption"] = "".into();
    value["events"]["floor"][0]["score"] = (-0.5).into();
    value["fundraising"]["raised"] = (-10).into();
    let descriptor = parse_descriptor(&to_raw(&value), DescriptorFormat::Json)?;

    let report = check_descriptor(&descriptor, &CheckSettings::default());
    let locations: Vec<&str> = report.errors().map(|i| i.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![
            "fundraising.raised",
            "photos[1].caption",
            "events.floor[0].score"
        ]
    );
    Ok(())
}

#[test]
fn widened_bounds_accept_high_scores() -> Result<()> {
    let mut value = sample_value();
    value["events"]["vault"][0]["score"] = 14.2.into();
    let descriptor = parse_descriptor(&to_raw(&value), DescriptorFormat::Json)?;

    let strict = check_descriptor(&descriptor, &CheckSettings::default());
    assert_eq!(
        strict.at("events.vault[0].score").map(|i| i.kind),
        Some(IssueKind::ScoreOutOfRange)
    );

    let open_scoring = CheckSettings {
        score_max: 20.0,
        ..CheckSettings::default()
    };
    assert!(check_descriptor(&descriptor, &open_scoring).is_clean());
    Ok(())
}

#[test]
fn empty_sponsor_url_only_warns() -> Result<()> {
    let mut value = sample_value();
    value["sponsors"][0]["url"] = "".into();
    let descriptor = parse_descriptor(&to_raw(&value), DescriptorFormat::Json)?;
    let report = check_descriptor(&descriptor, &CheckSettings::default());
    assert!(report.is_clean());
    assert_eq!(
        report.at("sponsors[0].url").map(|i| i.severity),
        Some(IssueSeverity::Warning)
    );
    Ok(())
}

#[test]
fn score_bounds_are_inclusive() -> Result<()> {
    let mut value = sample_value();
    value["events"]["vault"][0]["score"] = 10.into();
    value["events"]["bars"][0]["score"] = 0.into();
    let descriptor = parse_descriptor(&to_raw(&value), DescriptorFormat::Json)?;
    let report = check_descriptor(&descriptor, &CheckSettings::default());
    assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
    assert!(report.issues.is_empty());

    value["events"]["vault"][0]["score"] = 10.01.into();
    value["events"]["bars"][0]["score"] = (-0.01).into();
    let descriptor = parse_descriptor(&to_raw(&value), DescriptorFormat::Json)?;
    let report = check_descriptor(&descriptor, &CheckSettings::default());
    for location in ["events.vault[0].score", "events.bars[0].score"] {
        assert_eq!(
            report.at(location).map(|i| i.kind),
            Some(IssueKind::ScoreOutOfRange),
            "{location}"
        );
    }
    assert_eq!(report.errors().count(), 2);
    Ok(())
}
