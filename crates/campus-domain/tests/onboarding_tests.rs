//! Onboarding flow integration tests

use campus_domain::{
    FlowError, FlowState, MainTab, OnboardingFlow, ProfileDraft, Screen, VerificationStep,
};
use campus_id::{FixedYear, IdentifierValidator, LineScanSource, ScanSource, StubScanSource};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use std::io::Cursor;

fn validator() -> IdentifierValidator<FixedYear> {
    IdentifierValidator::with_clock(FixedYear(2024))
}

#[test]
fn test_stub_scan_to_main_screen() {
    let validator = validator();
    let mut source = StubScanSource::new();
    let mut flow = OnboardingFlow::new();

    flow.start_authentication().unwrap();
    let scan = source.acquire().unwrap();
    assert!(flow.submit_scan(&validator, scan.text().unwrap()).unwrap());

    match flow.state() {
        FlowState::Authenticating(status) => {
            assert_eq!(status.step, VerificationStep::Barcode);
            assert_eq!(status.masked_student_number().as_deref(), Some("2020****56"));
        }
        other => panic!("unexpected state {other:?}"),
    }

    flow.confirm_verification().unwrap();
    let standing = validator
        .derived_standing(flow.student_number().unwrap().as_str())
        .unwrap();
    assert_eq!(standing, 5);

    let now = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
    let draft = ProfileDraft::new("Han", "Chemistry").with_suggested_grade(standing);
    let profile = flow.complete_profile(draft, now).unwrap();
    assert_eq!(profile.grade, 5);
    assert_eq!(profile.updated_at, now);
    assert_eq!(flow.screen(), Screen::Main);
}

#[test]
fn test_line_scanner_retries_until_valid() {
    let validator = validator();
    let mut source = LineScanSource::new(Cursor::new("garbage\n1999123456\nS-2022-001122\n"));
    let mut flow = OnboardingFlow::new();
    flow.start_authentication().unwrap();

    let mut attempts = 0;
    loop {
        attempts += 1;
        let scan = source.acquire().unwrap();
        if flow.submit_scan(&validator, scan.text().unwrap()).unwrap() {
            break;
        }
    }
    assert_eq!(attempts, 3);

    flow.confirm_verification().unwrap();
    assert_eq!(flow.student_number().unwrap().as_str(), "2022001122");
}

#[rstest]
#[case(MainTab::Matching)]
#[case(MainTab::Chats)]
#[case(MainTab::Profile)]
fn test_select_each_tab(#[case] tab: MainTab) {
    let mut flow = OnboardingFlow::new();
    flow.start_authentication().unwrap();
    flow.submit_scan(&validator(), "2023123456").unwrap();
    flow.confirm_verification().unwrap();
    flow.complete_profile(ProfileDraft::new("Yoon", "Design").with_suggested_grade(2), Utc::now())
        .unwrap();

    flow.select_tab(tab).unwrap();
    assert!(matches!(flow.state(), FlowState::Main { tab: t, .. } if *t == tab));
}

#[rstest]
#[case("", "Biology", "name")]
#[case("Seo", "", "major")]
fn test_missing_required_field_blocks_profile(
    #[case] name: &str,
    #[case] major: &str,
    #[case] field: &str,
) {
    let mut flow = OnboardingFlow::new();
    flow.start_authentication().unwrap();
    flow.submit_scan(&validator(), "2023123456").unwrap();
    flow.confirm_verification().unwrap();

    let err = flow
        .complete_profile(ProfileDraft::new(name, major).with_suggested_grade(2), Utc::now())
        .unwrap_err();
    match err {
        FlowError::Profile(profile_err) => assert!(profile_err.to_string().contains(field)),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(flow.screen(), Screen::SettingUpProfile);
}
