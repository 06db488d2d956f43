use super::domain::{Condition, VehicleRecord, VehicleType};

const IMAGE_CDN: &str = "https://imagedelivery.net/LqiWLm-3MGbYHtFuUbcBtA";

/// Fixed set of vehicles the finder browses.
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            vehicles: STANDARD_INVENTORY
                .iter()
                .map(VehicleTemplate::to_record)
                .collect(),
        }
    }

    pub fn from_records(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn find(&self, id: u32) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

struct VehicleTemplate {
    id: u32,
    make: &'static str,
    model: &'static str,
    year: u16,
    condition: Condition,
    vehicle_type: VehicleType,
    price: u32,
    mileage: u32,
    safety_rating: u8,
    image_id: &'static str,
    safety_features: &'static [&'static str],
}

impl VehicleTemplate {
    fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            id: self.id,
            make: self.make.to_string(),
            model: self.model.to_string(),
            year: self.year,
            condition: self.condition,
            vehicle_type: self.vehicle_type,
            price: self.price,
            mileage: self.mileage,
            safety_rating: self.safety_rating,
            image_ref: format!("{IMAGE_CDN}/{}/public", self.image_id),
            safety_features: self
                .safety_features
                .iter()
                .map(|feature| feature.to_string())
                .collect(),
        }
    }
}

const STANDARD_INVENTORY: &[VehicleTemplate] = &[
    VehicleTemplate {
        id: 1,
        make: "Honda",
        model: "Civic",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Sedan,
        price: 25_000,
        mileage: 15,
        safety_rating: 5,
        image_id: "11a56110-85f2-4543-78b1-2856f616e400",
        safety_features: &[
            "Forward Collision Warning",
            "Lane Departure Warning",
            "Automatic Emergency Braking",
            "Blind Spot Monitoring",
        ],
    },
    VehicleTemplate {
        id: 2,
        make: "Toyota",
        model: "Corolla",
        year: 2023,
        condition: Condition::Preowned,
        vehicle_type: VehicleType::Sedan,
        price: 21_000,
        mileage: 12_000,
        safety_rating: 5,
        image_id: "170b0965-3c12-421b-4399-6d635c05c700",
        safety_features: &[
            "Toyota Safety Sense",
            "Adaptive Cruise Control",
            "Lane Keeping Assist",
            "Pre-Collision System",
        ],
    },
    VehicleTemplate {
        id: 3,
        make: "Mazda",
        model: "CX-5",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Suv,
        price: 32_000,
        mileage: 8,
        safety_rating: 5,
        image_id: "489b4f42-a8c9-4467-27b3-c15bdc0f4f00",
        safety_features: &[
            "Smart Brake Support",
            "Blind Spot Monitoring",
            "Rear Cross Traffic Alert",
            "Lane Keep Assist",
        ],
    },
    VehicleTemplate {
        id: 4,
        make: "Subaru",
        model: "Outback",
        year: 2023,
        condition: Condition::Preowned,
        vehicle_type: VehicleType::Suv,
        price: 28_000,
        mileage: 18_000,
        safety_rating: 5,
        image_id: "f3563428-1110-4c31-7ab3-e29ed80a4a00",
        safety_features: &[
            "EyeSight Driver Assist",
            "Reverse Automatic Braking",
            "Blind Spot Detection",
            "Rear Cross Traffic Alert",
        ],
    },
    VehicleTemplate {
        id: 5,
        make: "Hyundai",
        model: "Elantra",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Sedan,
        price: 23_000,
        mileage: 5,
        safety_rating: 4,
        image_id: "99e2b173-1991-4c07-b648-b3d952613d00",
        safety_features: &[
            "Forward Collision-Avoidance Assist",
            "Lane Keeping Assist",
            "Driver Attention Warning",
            "Blind-Spot Collision Warning",
        ],
    },
    VehicleTemplate {
        id: 6,
        make: "Volkswagen",
        model: "Golf",
        year: 2022,
        condition: Condition::Preowned,
        vehicle_type: VehicleType::Hatchback,
        price: 19_000,
        mileage: 25_000,
        safety_rating: 4,
        image_id: "4c1b1836-9b6f-4029-798c-85949d873000",
        safety_features: &[
            "Automatic Post-Collision Braking",
            "Blind Spot Monitor",
            "Rear Traffic Alert",
            "Forward Collision Warning",
        ],
    },
    VehicleTemplate {
        id: 7,
        make: "Kia",
        model: "Forte",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Sedan,
        price: 22_000,
        mileage: 10,
        safety_rating: 4,
        image_id: "7f12330a-1158-4503-4966-38600d350b00",
        safety_features: &[
            "Forward Collision Warning",
            "Lane Departure Warning",
            "Driver Attention Warning",
            "Rear Cross-Traffic Collision Warning",
        ],
    },
    VehicleTemplate {
        id: 8,
        make: "Nissan",
        model: "Rogue",
        year: 2023,
        condition: Condition::Preowned,
        vehicle_type: VehicleType::Suv,
        price: 27_000,
        mileage: 15_000,
        safety_rating: 4,
        image_id: "15a13c9e-f4e9-4081-49e0-f2034033b000",
        safety_features: &[
            "Automatic Emergency Braking",
            "Blind Spot Warning",
            "Rear Cross Traffic Alert",
            "Lane Departure Warning",
        ],
    },
    VehicleTemplate {
        id: 9,
        make: "Honda",
        model: "CR-V",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Suv,
        price: 33_000,
        mileage: 12,
        safety_rating: 5,
        image_id: "c2296b42-1271-4084-297c-3f9cb9076f00",
        safety_features: &[
            "Honda Sensing Suite",
            "Collision Mitigation Braking",
            "Road Departure Mitigation",
            "Adaptive Cruise Control",
        ],
    },
    VehicleTemplate {
        id: 10,
        make: "Ford",
        model: "F-150",
        year: 2024,
        condition: Condition::New,
        vehicle_type: VehicleType::Truck,
        price: 45_000,
        mileage: 20,
        safety_rating: 5,
        image_id: "48e55e51-f2f6-4999-7ef4-6f9a9446f200",
        safety_features: &[
            "Pre-Collision Assist",
            "Lane-Keeping System",
            "360-Degree Camera",
            "Blind Spot Information System",
        ],
    },
];
