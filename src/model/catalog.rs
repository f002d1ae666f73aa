//! ISO/IEC 25010 quality model and ISO/IEC 25023 standard metrics.
//!
//! Static reference tables: the eight product quality characteristics with
//! their sub-characteristics, and the default measures suggested for each
//! sub-characteristic.

use super::metric::{Direction, MetricDefinition, MetricRange, MetricSlot};
use indexmap::IndexMap;
use serde::Serialize;

/// A top-level quality characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Characteristic {
    pub id: &'static str,
    pub name: &'static str,
    pub sub_characteristics: &'static [SubCharacteristic],
}

impl Characteristic {
    /// Look up one of this characteristic's sub-characteristics.
    #[must_use]
    pub fn sub_characteristic(&self, id: &str) -> Option<&'static SubCharacteristic> {
        self.sub_characteristics.iter().find(|sub| sub.id == id)
    }
}

/// Refinement of a characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCharacteristic {
    pub id: &'static str,
    pub name: &'static str,
}

impl SubCharacteristic {
    const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// A standard measure from ISO/IEC 25023.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardMetric {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub direction: Direction,
    pub target: Option<f64>,
    pub description: &'static str,
}

impl StandardMetric {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        id: &'static str,
        code: &'static str,
        name: &'static str,
        unit: &'static str,
        range: (f64, f64),
        direction: Direction,
        target: Option<f64>,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            code,
            name,
            unit,
            min: range.0,
            max: range.1,
            direction,
            target,
            description,
        }
    }

    /// Build an owned definition usable in an analysis input.
    #[must_use]
    pub fn to_definition(&self) -> MetricDefinition {
        MetricDefinition {
            name: self.name.to_string(),
            unit: self.unit.to_string(),
            range: MetricRange::new(self.min, self.max),
            direction: self.direction,
            target: self.target,
            code: Some(self.code.to_string()),
            description: Some(self.description.to_string()),
        }
    }
}

/// The standard measures suggested for one sub-characteristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubCharacteristicMetrics {
    pub sub_characteristic: &'static str,
    pub metrics: &'static [StandardMetric],
}

/// Look up a characteristic by id.
#[must_use]
pub fn characteristic(id: &str) -> Option<&'static Characteristic> {
    CHARACTERISTICS.iter().find(|c| c.id == id)
}

/// Look up a sub-characteristic by its parent and own id.
#[must_use]
pub fn sub_characteristic(
    characteristic_id: &str,
    sub_id: &str,
) -> Option<&'static SubCharacteristic> {
    characteristic(characteristic_id).and_then(|c| c.sub_characteristic(sub_id))
}

/// Standard measures for a sub-characteristic (empty when unknown).
#[must_use]
pub fn standard_metrics(sub_id: &str) -> &'static [StandardMetric] {
    STANDARD_METRICS
        .iter()
        .find(|entry| entry.sub_characteristic == sub_id)
        .map_or(&[] as &[StandardMetric], |entry| entry.metrics)
}

/// Human-readable name for a characteristic id, falling back to the id itself.
#[must_use]
pub fn display_name(characteristic_id: &str) -> &str {
    characteristic(characteristic_id).map_or(characteristic_id, |c| c.name)
}

/// Human-readable name for a sub-characteristic, falling back to its id.
#[must_use]
pub fn sub_display_name<'a>(characteristic_id: &str, sub_id: &'a str) -> &'a str {
    sub_characteristic(characteristic_id, sub_id).map_or(sub_id, |s| s.name)
}

/// Metric map using the first standard measure of every sub-characteristic.
///
/// Unknown characteristic ids are skipped, as are sub-characteristics
/// without any standard measure.
#[must_use]
pub fn default_metric_set(
    characteristic_ids: &[String],
) -> IndexMap<String, IndexMap<String, MetricSlot>> {
    let mut metrics = IndexMap::new();
    for id in characteristic_ids {
        let Some(characteristic) = characteristic(id) else {
            tracing::debug!("No catalog entry for characteristic '{}'", id);
            continue;
        };
        let mut subs = IndexMap::new();
        for sub in characteristic.sub_characteristics {
            if let Some(first) = standard_metrics(sub.id).first() {
                subs.insert(sub.id.to_string(), MetricSlot::One(first.to_definition()));
            }
        }
        metrics.insert(id.clone(), subs);
    }
    metrics
}

pub static CHARACTERISTICS: &[Characteristic] = &[
    Characteristic {
        id: "functionalSuitability",
        name: "Functional Suitability",
        sub_characteristics: &[
            SubCharacteristic::new("functionalCompleteness", "Functional Completeness"),
            SubCharacteristic::new("functionalCorrectness", "Functional Correctness"),
            SubCharacteristic::new("functionalAppropriateness", "Functional Appropriateness"),
        ],
    },
    Characteristic {
        id: "performanceEfficiency",
        name: "Performance Efficiency",
        sub_characteristics: &[
            SubCharacteristic::new("timeBehaviour", "Time Behaviour"),
            SubCharacteristic::new("resourceUtilization", "Resource Utilization"),
            SubCharacteristic::new("capacity", "Capacity"),
        ],
    },
    Characteristic {
        id: "compatibility",
        name: "Compatibility",
        sub_characteristics: &[
            SubCharacteristic::new("coexistence", "Co-existence"),
            SubCharacteristic::new("interoperability", "Interoperability"),
        ],
    },
    Characteristic {
        id: "usability",
        name: "Usability",
        sub_characteristics: &[
            SubCharacteristic::new("appropriatenessRecognizability", "Appropriateness Recognizability"),
            SubCharacteristic::new("learnability", "Learnability"),
            SubCharacteristic::new("operability", "Operability"),
            SubCharacteristic::new("userErrorProtection", "User Error Protection"),
            SubCharacteristic::new("userInterfaceAesthetics", "User Interface Aesthetics"),
            SubCharacteristic::new("accessibility", "Accessibility"),
        ],
    },
    Characteristic {
        id: "reliability",
        name: "Reliability",
        sub_characteristics: &[
            SubCharacteristic::new("maturity", "Maturity"),
            SubCharacteristic::new("availability", "Availability"),
            SubCharacteristic::new("faultTolerance", "Fault Tolerance"),
            SubCharacteristic::new("recoverability", "Recoverability"),
        ],
    },
    Characteristic {
        id: "security",
        name: "Security",
        sub_characteristics: &[
            SubCharacteristic::new("confidentiality", "Confidentiality"),
            SubCharacteristic::new("integrity", "Integrity"),
            SubCharacteristic::new("nonRepudiation", "Non-repudiation"),
            SubCharacteristic::new("accountability", "Accountability"),
            SubCharacteristic::new("authenticity", "Authenticity"),
        ],
    },
    Characteristic {
        id: "maintainability",
        name: "Maintainability",
        sub_characteristics: &[
            SubCharacteristic::new("modularity", "Modularity"),
            SubCharacteristic::new("reusability", "Reusability"),
            SubCharacteristic::new("analysability", "Analysability"),
            SubCharacteristic::new("modifiability", "Modifiability"),
            SubCharacteristic::new("testability", "Testability"),
        ],
    },
    Characteristic {
        id: "portability",
        name: "Portability",
        sub_characteristics: &[
            SubCharacteristic::new("adaptability", "Adaptability"),
            SubCharacteristic::new("installability", "Installability"),
            SubCharacteristic::new("replaceability", "Replaceability"),
        ],
    },
];

pub static STANDARD_METRICS: &[SubCharacteristicMetrics] = &[
    SubCharacteristicMetrics {
        sub_characteristic: "functionalCompleteness",
        metrics: &[
            StandardMetric::new(
                "functionalCoverage",
                "FCp-1-G",
                "Functional Coverage",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the specified functions has been implemented? (1 - A/B where A=missing, B=specified)",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "functionalCorrectness",
        metrics: &[
            StandardMetric::new(
                "functionalCorrectness",
                "FCr-1-G",
                "Functional Correctness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of functions provides the correct results? (1 - A/B where A=incorrect, B=considered)",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "functionalAppropriateness",
        metrics: &[
            StandardMetric::new(
                "functionalAppropriatenessOfUsageObjective",
                "FAp-1-G",
                "Functional Appropriateness of Usage Objective",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the functions required by the user provides appropriate outcome to achieve a specific usage objective?",
            ),
            StandardMetric::new(
                "functionalAppropriatenessOfSystem",
                "FAp-2-G",
                "Functional Appropriateness of System",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the functions required by the users to achieve their objectives provides appropriate outcome?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "timeBehaviour",
        metrics: &[
            StandardMetric::new(
                "meanResponseTime",
                "PTb-1-G",
                "Mean Response Time",
                "ms",
                (0.0, 10000.0),
                Direction::Lower,
                Some(1000.0),
                "How long is the mean time taken by the system to respond to a user task or system task?",
            ),
            StandardMetric::new(
                "responseTimeAdequacy",
                "PTb-2-G",
                "Response Time Adequacy",
                "ratio",
                (0.0, 10.0),
                Direction::Lower,
                Some(1.0),
                "How well does the system response time meet the specified target? (A/B where A=mean response time, B=target)",
            ),
            StandardMetric::new(
                "meanTurnaroundTime",
                "PTb-3-G",
                "Mean Turnaround Time",
                "ms",
                (0.0, 100000.0),
                Direction::Lower,
                Some(5000.0),
                "What is the mean time taken for completion of a job or an asynchronous process?",
            ),
            StandardMetric::new(
                "turnaroundTimeAdequacy",
                "PTb-4-G",
                "Turnaround Time Adequacy",
                "ratio",
                (0.0, 10.0),
                Direction::Lower,
                Some(1.0),
                "How well does the turnaround time meet the specified targets? (A/B where A=mean turnaround time, B=target)",
            ),
            StandardMetric::new(
                "meanThroughput",
                "PTb-5-G",
                "Mean Throughput",
                "ops/sec",
                (0.0, 10000.0),
                Direction::Higher,
                Some(1000.0),
                "What is the mean number of jobs completed per unit time?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "resourceUtilization",
        metrics: &[
            StandardMetric::new(
                "meanProcessorUtilization",
                "PRu-1-G",
                "Mean Processor Utilization",
                "ratio",
                (0.0, 1.0),
                Direction::Lower,
                Some(0.7),
                "How much processor time is used to execute a given set of tasks compared to the operation time?",
            ),
            StandardMetric::new(
                "meanMemoryUtilization",
                "PRu-2-G",
                "Mean Memory Utilization",
                "ratio",
                (0.0, 1.0),
                Direction::Lower,
                Some(0.8),
                "How much of memory is used to execute a given set of tasks compared to the available memory?",
            ),
            StandardMetric::new(
                "meanIODevicesUtilization",
                "PRu-3-G",
                "Mean I/O Devices Utilization",
                "ratio",
                (0.0, 1.0),
                Direction::Lower,
                Some(0.7),
                "How much of I/O device busy time is used to perform a given set of tasks compared to the I/O operation time?",
            ),
            StandardMetric::new(
                "bandwidthUtilization",
                "PRu-4-S",
                "Bandwidth Utilization",
                "ratio",
                (0.0, 1.0),
                Direction::Lower,
                Some(0.8),
                "What proportion of the available bandwidth is utilized to perform a given set of tasks?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "capacity",
        metrics: &[
            StandardMetric::new(
                "transactionProcessingCapacity",
                "PCa-1-G",
                "Transaction Processing Capacity",
                "transactions/sec",
                (0.0, 100000.0),
                Direction::Higher,
                Some(1000.0),
                "How many transactions can be processed per unit time?",
            ),
            StandardMetric::new(
                "userAccessCapacity",
                "PCa-2-G",
                "User Access Capacity",
                "users",
                (0.0, 100000.0),
                Direction::Higher,
                Some(10000.0),
                "How many users can access the system simultaneously at a certain time?",
            ),
            StandardMetric::new(
                "userAccessIncreaseAdequacy",
                "PCa-3-S",
                "User Access Increase Adequacy",
                "users/sec",
                (0.0, 1000.0),
                Direction::Higher,
                Some(100.0),
                "How many users can be added successfully per unit time?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "coexistence",
        metrics: &[
            StandardMetric::new(
                "coexistenceWithOtherProducts",
                "CCo-1-G",
                "Co-existence with Other Products",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of specified software products can share the environment with this software product without adverse impact?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "interoperability",
        metrics: &[
            StandardMetric::new(
                "dataFormatsExchangeability",
                "CIn-1-G",
                "Data Formats Exchangeability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the specified data formats is exchangeable with other software or systems?",
            ),
            StandardMetric::new(
                "dataExchangeProtocolSufficiency",
                "CIn-2-G",
                "Data Exchange Protocol Sufficiency",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the specified data exchange protocols is supported?",
            ),
            StandardMetric::new(
                "externalInterfaceAdequacy",
                "CIn-3-S",
                "External Interface Adequacy",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the specified external interfaces (interfaces with other software and systems) is functional?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "appropriatenessRecognizability",
        metrics: &[
            StandardMetric::new(
                "descriptionCompleteness",
                "UAp-1-G",
                "Description Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of usage scenarios is described in the product description or user documents?",
            ),
            StandardMetric::new(
                "demonstrationCoverage",
                "UAp-2-S",
                "Demonstration Coverage",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of tasks has demonstration features for users to recognize the appropriateness?",
            ),
            StandardMetric::new(
                "entryPointSelfDescriptiveness",
                "UAp-3-S",
                "Entry Point Self-descriptiveness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the commonly used landing pages on a website explains the purpose of the website?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "learnability",
        metrics: &[
            StandardMetric::new(
                "userGuidanceCompleteness",
                "ULe-1-G",
                "User Guidance Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of functions is explained in sufficient detail in user documentation and/or help facility?",
            ),
            StandardMetric::new(
                "entryFieldsDefaults",
                "ULe-2-S",
                "Entry Fields Defaults",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of entry fields that could have default values are automatically filled with default values?",
            ),
            StandardMetric::new(
                "errorMessagesUnderstandability",
                "ULe-3-S",
                "Error Messages Understandability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the error messages state the reason why the error occurred and how to resolve it?",
            ),
            StandardMetric::new(
                "selfExplanatoryUserInterface",
                "ULe-4-S",
                "Self-explanatory User Interface",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of information elements and steps presented to the user enable common tasks to be completed by a first-time user?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "operability",
        metrics: &[
            StandardMetric::new(
                "operationalConsistency",
                "UOp-1-G",
                "Operational Consistency",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "To what extent do interactive tasks have a behaviour and appearance that is consistent both within the task and across similar tasks? (1 - A/B)",
            ),
            StandardMetric::new(
                "messageClarity",
                "UOp-2-G",
                "Message Clarity",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of messages from a system conveys the right outcome or instructions to the user?",
            ),
            StandardMetric::new(
                "functionalCustomizability",
                "UOp-3-S",
                "Functional Customizability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.7),
                "What proportion of functions and operational procedures can a user customize for his convenience?",
            ),
            StandardMetric::new(
                "userInterfaceCustomizability",
                "UOp-4-S",
                "User Interface Customizability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.7),
                "What proportion of user interface elements can be customized in appearance?",
            ),
            StandardMetric::new(
                "monitoringCapability",
                "UOp-5-S",
                "Monitoring Capability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of function states can be monitored during operation?",
            ),
            StandardMetric::new(
                "undoCapability",
                "UOp-6-S",
                "Undo Capability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "What proportion of tasks that has a significant consequence provides an option for re-confirmation or undo capability?",
            ),
            StandardMetric::new(
                "understandableCategorizationOfInformation",
                "UOp-7-S",
                "Understandable Categorization of Information",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "To what extent does the software organize information in categories that are familiar to the intended users?",
            ),
            StandardMetric::new(
                "appearanceConsistency",
                "UOp-8-S",
                "Appearance Consistency",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of user interfaces with similar items has a similar appearance? (1 - A/B)",
            ),
            StandardMetric::new(
                "inputDeviceSupport",
                "UOp-9-S",
                "Input Device Support",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "To what extent can tasks be initiated by all appropriate input modalities (such as keyboard, mouse or voice)?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "userErrorProtection",
        metrics: &[
            StandardMetric::new(
                "avoidanceOfUserOperationError",
                "UEp-1-G",
                "Avoidance of User Operation Error",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What portion of user actions and inputs are protected against causing any system malfunction?",
            ),
            StandardMetric::new(
                "userEntryErrorCorrection",
                "UEp-2-S",
                "User Entry Error Correction",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "To what extent does the system provide a suggested correct value for detected user entry errors?",
            ),
            StandardMetric::new(
                "userErrorRecoverability",
                "UEp-3-S",
                "User Error Recoverability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "What proportion of user errors can be corrected or recovered by the system?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "userInterfaceAesthetics",
        metrics: &[
            StandardMetric::new(
                "appearanceAestheticsOfUserInterfaces",
                "UIn-1-S",
                "Appearance Aesthetics of User Interfaces",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "To what extent are user interfaces and the overall design aesthetically pleasing in appearance?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "accessibility",
        metrics: &[
            StandardMetric::new(
                "accessibilityForUsersWithDisabilities",
                "UAc-1-G",
                "Accessibility for Users with Disabilities",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "To what extent can potential users with specific disabilities successfully use the system?",
            ),
            StandardMetric::new(
                "supportedLanguagesAdequacy",
                "UAc-2-S",
                "Supported Languages Adequacy",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of needed languages is supported?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "maturity",
        metrics: &[
            StandardMetric::new(
                "faultCorrection",
                "RMa-1-G",
                "Fault Correction",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of detected reliability-related faults has been corrected?",
            ),
            StandardMetric::new(
                "meanTimeBetweenFailure",
                "RMa-2-G",
                "Mean Time Between Failure - MTBF",
                "hours",
                (0.0, 100000.0),
                Direction::Higher,
                Some(720.0),
                "What is the MTBF during the system/software operation?",
            ),
            StandardMetric::new(
                "failureRate",
                "RMa-3-G",
                "Failure Rate",
                "failures/hour",
                (0.0, 100.0),
                Direction::Lower,
                Some(0.001),
                "What is the average number of failures during a defined period?",
            ),
            StandardMetric::new(
                "testCoverage",
                "RMa-4-S",
                "Test Coverage",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What percentage of the system or software capabilities, operational scenarios or functions that are included in their associated test suites are actually performed?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "availability",
        metrics: &[
            StandardMetric::new(
                "systemAvailability",
                "RAv-1-G",
                "System Availability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.999),
                "For what proportion of the scheduled system operational time is the system actually available?",
            ),
            StandardMetric::new(
                "meanDownTime",
                "RAv-2-G",
                "Mean Down Time",
                "minutes",
                (0.0, 1440.0),
                Direction::Lower,
                Some(30.0),
                "How long does the system stay unavailable when a failure occurs?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "faultTolerance",
        metrics: &[
            StandardMetric::new(
                "failureAvoidance",
                "RFt-1-G",
                "Failure Avoidance",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "What proportion of fault patterns has been brought under control to avoid critical and serious failures?",
            ),
            StandardMetric::new(
                "redundancyOfComponents",
                "RFt-2-S",
                "Redundancy of Components",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of system components is installed redundantly to avoid system failure?",
            ),
            StandardMetric::new(
                "meanFaultNotificationTime",
                "RFt-3-S",
                "Mean Fault Notification Time",
                "seconds",
                (0.0, 3600.0),
                Direction::Lower,
                Some(60.0),
                "How quickly does the system report the occurrence of faults?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "recoverability",
        metrics: &[
            StandardMetric::new(
                "meanRecoveryTime",
                "RRe-1-G",
                "Mean Recovery Time",
                "minutes",
                (0.0, 1440.0),
                Direction::Lower,
                Some(30.0),
                "How long does it take for the software/system to recover from failure?",
            ),
            StandardMetric::new(
                "backupDataCompleteness",
                "RRe-2-S",
                "Backup Data Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of data items is backed up regularly?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "confidentiality",
        metrics: &[
            StandardMetric::new(
                "accessControllability",
                "SCo-1-G",
                "Access Controllability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of confidential data items are protected from unauthorized accesses? (1 - A/B)",
            ),
            StandardMetric::new(
                "dataEncryptionCorrectness",
                "SCo-2-G",
                "Data Encryption Correctness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "How correctly is the encryption/decryption of data items implemented as stated in the requirement specification?",
            ),
            StandardMetric::new(
                "strengthOfCryptographicAlgorithms",
                "SCo-3-S",
                "Strength of Cryptographic Algorithms",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of cryptographic algorithms has been well-vetted? (1 - A/B)",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "integrity",
        metrics: &[
            StandardMetric::new(
                "dataIntegrity",
                "SIn-1-G",
                "Data Integrity",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "To what extent is the data corruption or modification by unauthorized access prevented? (1 - A/B)",
            ),
            StandardMetric::new(
                "internalDataCorruptionPrevention",
                "SIn-2-G",
                "Internal Data Corruption Prevention",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "To what extent are the available prevention methods for data corruption implemented?",
            ),
            StandardMetric::new(
                "bufferOverflowPrevention",
                "SIn-3-S",
                "Buffer Overflow Prevention",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What portion of memory accesses with user input in software modules has been done bounds checking for preventing buffer overflow?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "nonRepudiation",
        metrics: &[
            StandardMetric::new(
                "digitalSignatureUsage",
                "SNo-1-G",
                "Digital Signature Usage",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of events requiring non-repudiation is processed using digital signature?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "accountability",
        metrics: &[
            StandardMetric::new(
                "userAuditTrailCompleteness",
                "SAc-1-G",
                "User Audit Trail Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "How complete is the audit trail concerning the user access to the system or data?",
            ),
            StandardMetric::new(
                "systemLogRetention",
                "SAc-2-S",
                "System Log Retention",
                "ratio",
                (0.0, 2.0),
                Direction::Higher,
                Some(1.0),
                "For what percent of the required retention period is the system log retained in stable storage?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "authenticity",
        metrics: &[
            StandardMetric::new(
                "authenticationMechanismSufficiency",
                "SAu-1-G",
                "Authentication Mechanism Sufficiency",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "How well does the system authenticate the identity of a subject?",
            ),
            StandardMetric::new(
                "authenticationRulesConformity",
                "SAu-2-S",
                "Authentication Rules Conformity",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the required authentication rules is established?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "modularity",
        metrics: &[
            StandardMetric::new(
                "couplingOfComponents",
                "MMo-1-G",
                "Coupling of Components",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "How strongly are the components independent and how many components are free from impacts from changes to other components?",
            ),
            StandardMetric::new(
                "cyclomaticComplexityAdequacy",
                "MMo-2-S",
                "Cyclomatic Complexity Adequacy",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "How many software modules have acceptable cyclomatic complexity? (1 - A/B)",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "reusability",
        metrics: &[
            StandardMetric::new(
                "reusabilityOfAssets",
                "MRe-1-G",
                "Reusability of Assets",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.7),
                "How many assets in a system can be reusable?",
            ),
            StandardMetric::new(
                "codingRulesConformity",
                "MRe-2-S",
                "Coding Rules Conformity",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "How many modules conform to required coding rules?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "analysability",
        metrics: &[
            StandardMetric::new(
                "systemLogCompleteness",
                "MAn-1-G",
                "System Log Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "To what extent does the system record its operations in logs so that they are to be traceable?",
            ),
            StandardMetric::new(
                "diagnosisFunctionEffectiveness",
                "MAn-2-S",
                "Diagnosis Function Effectiveness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of the diagnosis functions meets the requirements of causal analysis?",
            ),
            StandardMetric::new(
                "diagnosisFunctionSufficiency",
                "MAn-3-S",
                "Diagnosis Function Sufficiency",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "What proportion of the required diagnosis functions has been implemented?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "modifiability",
        metrics: &[
            StandardMetric::new(
                "modificationEfficiency",
                "MMd-1-G",
                "Modification Efficiency",
                "ratio",
                (0.0, 5.0),
                Direction::Lower,
                Some(1.0),
                "How efficiently are the modifications made compared to the expected time? (A/B where A=actual time, B=expected time)",
            ),
            StandardMetric::new(
                "modificationCorrectness",
                "MMd-2-G",
                "Modification Correctness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.95),
                "What proportion of modifications has been implemented correctly? (1 - A/B where A=modifications causing incidents)",
            ),
            StandardMetric::new(
                "modificationCapability",
                "MMd-3-S",
                "Modification Capability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "To what extent are the required modifications made within a specified duration?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "testability",
        metrics: &[
            StandardMetric::new(
                "testFunctionCompleteness",
                "MTe-1-G",
                "Test Function Completeness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "How completely are test functions and facilities implemented?",
            ),
            StandardMetric::new(
                "autonomousTestability",
                "MTe-2-S",
                "Autonomous Testability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "How independently can the software be tested?",
            ),
            StandardMetric::new(
                "testRestartability",
                "MTe-3-S",
                "Test Restartability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "How easily can the operation test be carried out from the restart point after maintenance?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "adaptability",
        metrics: &[
            StandardMetric::new(
                "hardwareEnvironmentalAdaptability",
                "PAd-1-G",
                "Hardware Environmental Adaptability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "Is software or system capable enough to adapt itself to different hardware environment? (1 - A/B)",
            ),
            StandardMetric::new(
                "systemSoftwareEnvironmentalAdaptability",
                "PAd-2-G",
                "System Software Environmental Adaptability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "Is software or system capable enough to adapt itself to different system software environment? (1 - A/B)",
            ),
            StandardMetric::new(
                "operationalEnvironmentAdaptability",
                "PAd-3-S",
                "Operational Environment Adaptability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "Is software or system capable enough to adapt itself to different operational environment? (1 - A/B)",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "installability",
        metrics: &[
            StandardMetric::new(
                "installationTimeEfficiency",
                "PIn-1-G",
                "Installation Time Efficiency",
                "ratio",
                (0.0, 5.0),
                Direction::Lower,
                Some(1.0),
                "How efficient is the actual installation time compared to expected time? (A/B where A=actual, B=expected)",
            ),
            StandardMetric::new(
                "easeOfInstallation",
                "PIn-2-G",
                "Ease of Installation",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "Can users or maintainers customize the installation procedure for their convenience?",
            ),
        ],
    },
    SubCharacteristicMetrics {
        sub_characteristic: "replaceability",
        metrics: &[
            StandardMetric::new(
                "usageSimilarity",
                "PRe-1-G",
                "Usage Similarity",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.8),
                "What proportion of user functions of the replaced product can be performed without any additional learning or workaround?",
            ),
            StandardMetric::new(
                "productQualityEquivalence",
                "PRe-2-S",
                "Product Quality Equivalence",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "What proportion of the quality measures is satisfied after replacing previous software product by this one?",
            ),
            StandardMetric::new(
                "functionalInclusiveness",
                "PRe-3-S",
                "Functional Inclusiveness",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(0.9),
                "Can the similar functions easily be used after replacing previous software product by this one?",
            ),
            StandardMetric::new(
                "dataReusabilityImportCapability",
                "PRe-4-S",
                "Data Reusability/Import Capability",
                "ratio",
                (0.0, 1.0),
                Direction::Higher,
                Some(1.0),
                "Can the same data be used after replacing previous software product by this one?",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_characteristics() {
        assert_eq!(CHARACTERISTICS.len(), 8);
        assert!(characteristic("security").is_some());
        assert!(characteristic("flexibility").is_none());
    }

    #[test]
    fn test_every_sub_characteristic_has_standard_metrics() {
        for c in CHARACTERISTICS {
            for sub in c.sub_characteristics {
                assert!(
                    !standard_metrics(sub.id).is_empty(),
                    "{}/{} has no standard metrics",
                    c.id,
                    sub.id
                );
            }
        }
    }

    #[test]
    fn test_standard_metric_ranges_are_well_formed() {
        for entry in STANDARD_METRICS {
            for metric in entry.metrics {
                assert!(metric.min < metric.max, "{} has a bad range", metric.id);
                if let Some(target) = metric.target {
                    assert!(target > 0.0, "{} has a non-positive target", metric.id);
                }
            }
        }
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(display_name("performanceEfficiency"), "Performance Efficiency");
        assert_eq!(display_name("customDimension"), "customDimension");
        assert_eq!(sub_display_name("security", "nonRepudiation"), "Non-repudiation");
        assert_eq!(sub_display_name("security", "unknownSub"), "unknownSub");
    }

    #[test]
    fn test_default_metric_set_uses_first_measure() {
        let set = default_metric_set(&["reliability".to_string(), "nope".to_string()]);
        assert_eq!(set.len(), 1);
        let reliability = &set["reliability"];
        assert_eq!(reliability.len(), 4);
        let maturity = reliability["maturity"].as_slice();
        assert_eq!(maturity.len(), 1);
        assert_eq!(maturity[0].code.as_deref(), Some("RMa-1-G"));
    }
}
