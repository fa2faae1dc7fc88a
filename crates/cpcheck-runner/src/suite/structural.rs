//! Structural cases: the SUT source tree on disk

use cpcheck_core::{CaseResult, CaseStatus};

use super::Suite;

const DEMO: &str = "src/main/java/com/example/demo";

pub(super) fn entity_folder_exists(suite: &mut Suite) -> CaseResult {
    suite
        .tree
        .require_dir(&format!("{DEMO}/entity"), "Entity folder should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn controller_folder_exists(suite: &mut Suite) -> CaseResult {
    suite
        .tree
        .require_dir(&format!("{DEMO}/controller"), "Controller folder should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn service_folder_exists(suite: &mut Suite) -> CaseResult {
    suite
        .tree
        .require_dir(&format!("{DEMO}/service"), "Service folder should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn repository_folder_exists(suite: &mut Suite) -> CaseResult {
    suite
        .tree
        .require_dir(&format!("{DEMO}/repository"), "Repository folder should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn user_entity_file_exists(suite: &mut Suite) -> CaseResult {
    let path = suite.tree.source_file(&format!("{DEMO}/entity/User"));
    suite.tree.require_file(&path, "User entity file should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn complaint_entity_file_exists(suite: &mut Suite) -> CaseResult {
    let path = suite.tree.source_file(&format!("{DEMO}/entity/Complaint"));
    suite
        .tree
        .require_file(&path, "Complaint entity file should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn auth_controller_file_exists(suite: &mut Suite) -> CaseResult {
    let path = suite
        .tree
        .source_file(&format!("{DEMO}/controller/AuthController"));
    suite
        .tree
        .require_file(&path, "AuthController file should exist")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn complaint_controller_file_exists(suite: &mut Suite) -> CaseResult {
    let path = suite
        .tree
        .source_file(&format!("{DEMO}/controller/ComplaintController"));
    suite
        .tree
        .require_file(&path, "ComplaintController file should exist")?;
    Ok(CaseStatus::Passed)
}
