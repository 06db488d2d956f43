/// NHTSA result keys the report knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    VehicleId,
    VehicleDescription,
    VehiclePicture,
    ModelYear,
    Make,
    Model,
    OverallRating,
    OverallFrontCrashRating,
    OverallSideCrashRating,
    RolloverRating,
    FrontCrashDriversideRating,
    FrontCrashPassengersideRating,
    SideCrashDriversideRating,
    SideCrashPassengersideRating,
    SidePoleCrashRating,
    CombinedSideBarrierAndPoleRatingFront,
    CombinedSideBarrierAndPoleRatingRear,
    RolloverRating2,
    RolloverPossibility,
    RolloverPossibility2,
    DynamicTipResult,
    ElectronicStabilityControl,
    ForwardCollisionWarning,
    LaneDepartureWarning,
    ComplaintsCount,
    RecallsCount,
    InvestigationCount,
}

impl RatingField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::VehicleId => "VehicleId",
            Self::VehicleDescription => "VehicleDescription",
            Self::VehiclePicture => "VehiclePicture",
            Self::ModelYear => "ModelYear",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::OverallRating => "OverallRating",
            Self::OverallFrontCrashRating => "OverallFrontCrashRating",
            Self::OverallSideCrashRating => "OverallSideCrashRating",
            Self::RolloverRating => "RolloverRating",
            Self::FrontCrashDriversideRating => "FrontCrashDriversideRating",
            Self::FrontCrashPassengersideRating => "FrontCrashPassengersideRating",
            Self::SideCrashDriversideRating => "SideCrashDriversideRating",
            Self::SideCrashPassengersideRating => "SideCrashPassengersideRating",
            Self::SidePoleCrashRating => "SidePoleCrashRating",
            Self::CombinedSideBarrierAndPoleRatingFront => {
                "combinedSideBarrierAndPoleRating-Front"
            }
            Self::CombinedSideBarrierAndPoleRatingRear => "combinedSideBarrierAndPoleRating-Rear",
            Self::RolloverRating2 => "RolloverRating2",
            Self::RolloverPossibility => "RolloverPossibility",
            Self::RolloverPossibility2 => "RolloverPossibility2",
            Self::DynamicTipResult => "dynamicTipResult",
            Self::ElectronicStabilityControl => "NHTSAElectronicStabilityControl",
            Self::ForwardCollisionWarning => "NHTSAForwardCollisionWarning",
            Self::LaneDepartureWarning => "NHTSALaneDepartureWarning",
            Self::ComplaintsCount => "ComplaintsCount",
            Self::RecallsCount => "RecallsCount",
            Self::InvestigationCount => "InvestigationCount",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VehicleId => "Vehicle ID",
            Self::VehicleDescription => "Vehicle",
            Self::VehiclePicture => "Picture",
            Self::ModelYear => "Model Year",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::OverallRating => "Overall Rating",
            Self::OverallFrontCrashRating => "Front Crash Rating",
            Self::OverallSideCrashRating => "Side Crash Rating",
            Self::RolloverRating => "Rollover Rating",
            Self::FrontCrashDriversideRating => "Front Crash - Driver Side",
            Self::FrontCrashPassengersideRating => "Front Crash - Passenger Side",
            Self::SideCrashDriversideRating => "Side Crash - Driver Side",
            Self::SideCrashPassengersideRating => "Side Crash - Passenger Side",
            Self::SidePoleCrashRating => "Side Pole Crash Rating",
            Self::CombinedSideBarrierAndPoleRatingFront => "Side Barrier Rating - Front",
            Self::CombinedSideBarrierAndPoleRatingRear => "Side Barrier Rating - Rear",
            Self::RolloverRating2 => "Rollover Rating (Alternative)",
            Self::RolloverPossibility => "Rollover Possibility",
            Self::RolloverPossibility2 => "Rollover Possibility (Alt)",
            Self::DynamicTipResult => "Dynamic Tip Result",
            Self::ElectronicStabilityControl => "Electronic Stability Control",
            Self::ForwardCollisionWarning => "Forward Collision Warning",
            Self::LaneDepartureWarning => "Lane Departure Warning",
            Self::ComplaintsCount => "Complaints",
            Self::RecallsCount => "Recalls",
            Self::InvestigationCount => "Investigations",
        }
    }
}
