//! Python wrappers for pathreport enums

use pyo3::prelude::*;

use super::macros::{impl_py_from, py_enum_wrapper};
use crate::types::{AccessionLabel, FieldTruncation, ReportLevelFallback, UnlabeledSpecimens};

py_enum_wrapper!(
    PyAccessionLabel,
    AccessionLabel,
    "AccessionLabel",
    [
        ACCESSION_NUMBER => AccessionNumber,
        ACCESSION => Accession,
        CASE_NUMBER => CaseNumber,
        PATHOLOGY_NUMBER => PathologyNumber,
    ]
);

py_enum_wrapper!(
    PyUnlabeledSpecimens,
    UnlabeledSpecimens,
    "UnlabeledSpecimens",
    [
        SINGLE_IMPLICIT => SingleImplicit,
        ONE_PER_LINE => OnePerLine,
    ]
);

py_enum_wrapper!(
    PyReportLevelFallback,
    ReportLevelFallback,
    "ReportLevelFallback",
    [
        BROADCAST => Broadcast,
        LEAVE_EMPTY => LeaveEmpty,
    ]
);

py_enum_wrapper!(
    PyFieldTruncation,
    FieldTruncation,
    "FieldTruncation",
    [
        FULL => Full,
        FIRST_LINE => FirstLine,
    ]
);
