//! Subcommand implementations

use std::io;
use std::process::ExitCode;

use campus_domain::{
    validate_draft, FlowError, OnboardingFlow, ProfileDraft, ValidationSeverity, RETRY_MESSAGE,
};
use campus_id::{
    IdentifierValidator, LineScanSource, ScanError, ScanSource, StubScanSource, YearSource,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// `campus check`: exit status 1 when the text holds no valid number
pub fn check<C: YearSource>(validator: &IdentifierValidator<C>, text: &str) -> ExitCode {
    match validator.evaluate(text) {
        Ok(number) => {
            println!("accepted: {}", validator.mask(number.as_str()));
            println!("admission year: {}", number.admission_year());
            println!(
                "year of study: {}",
                number.standing(validator.current_year(), &validator.config().standing)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("rejected: {err}");
            ExitCode::FAILURE
        }
    }
}

/// `campus standing`
pub fn standing<C: YearSource>(
    validator: &IdentifierValidator<C>,
    student_number: &str,
) -> CliResult<ExitCode> {
    let year = validator.admission_year(student_number)?;
    let standing = validator.derived_standing(student_number)?;
    println!("admission year: {year}");
    println!("year of study: {standing}");
    Ok(ExitCode::SUCCESS)
}

fn open_source(stdin: bool) -> Box<dyn ScanSource> {
    if stdin {
        Box::new(LineScanSource::new(io::stdin().lock()))
    } else {
        Box::new(StubScanSource::new())
    }
}

/// `campus scan`: validates every scan the source delivers. The stub
/// delivers exactly one.
pub fn scan<C: YearSource>(validator: &IdentifierValidator<C>, stdin: bool) -> CliResult<ExitCode> {
    let mut source = open_source(stdin);
    let mut rejected = 0usize;

    loop {
        let raw = match source.acquire() {
            Ok(raw) => raw,
            Err(ScanError::Exhausted(_)) => break,
            Err(err) => return Err(err.into()),
        };

        match validator.process_scan(&raw)? {
            Some(number) => println!("{}", validator.mask(number.as_str())),
            None => {
                rejected += 1;
                println!("{RETRY_MESSAGE}");
            }
        }

        if !stdin {
            break;
        }
    }

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `campus onboard`: scan until accepted, then build the profile
pub fn onboard<C: YearSource>(
    validator: &IdentifierValidator<C>,
    args: super::OnboardArgs,
) -> CliResult<ExitCode> {
    let mut flow = OnboardingFlow::new();
    flow.start_authentication()?;

    let mut source = open_source(args.stdin);
    loop {
        let raw = match source.acquire() {
            Ok(raw) => raw,
            Err(ScanError::Exhausted(_)) => {
                eprintln!("no valid student card scanned");
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        };
        if flow.submit_scan(validator, raw.text()?)? {
            break;
        }
        eprintln!("{RETRY_MESSAGE}");
        if !args.stdin {
            return Ok(ExitCode::FAILURE);
        }
    }
    flow.confirm_verification()?;

    let student_number = flow.student_number().ok_or(FlowError::NotVerified)?;
    let suggested = student_number.standing(validator.current_year(), &validator.config().standing);

    let draft = ProfileDraft {
        grade: args.grade.unwrap_or_default(),
        bio: args.bio,
        interests: args.interests,
        phone_number: args.phone,
        ..ProfileDraft::new(args.name, args.major)
    }
    .with_suggested_grade(suggested);

    for issue in validate_draft(&draft) {
        if issue.severity != ValidationSeverity::Error {
            tracing::warn!(field = %issue.field, "{}", issue.message);
        }
    }

    let profile = flow.complete_profile(draft, chrono::Utc::now())?;
    println!("{}", serde_json::to_string_pretty(profile)?);
    Ok(ExitCode::SUCCESS)
}
