//! Sample notification texts, shaped like the API's YAML bodies.
//!
//! File times are `131493870000000000` (2017-09-08 23:30:00) throughout.

use reconbot_domain::NotificationType;

pub const WAR_DECLARED: &str = "\
againstID: 98000002
cost: 50000000
declaredByID: 99000001
delayHours: 24
hostileState: 0
";

pub const SOV_CLAIM: &str = "\
allianceID: 99000001
corpID: 98000001
solarSystemID: 30004759
";

pub const TOWER_ALERT: &str = "\
aggressorAllianceID: 99000001
aggressorCorpID: 98000002
aggressorID: 90000001
armorValue: 1.0
hullValue: 1
moonID: 40009082
shieldValue: 0.25
solarSystemID: 30000142
typeID: 16213
";

pub const STATION_CONQUERED: &str = "\
charID: 90000001
newOwnerID: 98000003
oldOwnerID: 98000002
solarSystemID: 30004759
stationID: 60000001
";

pub const ORBITAL_ATTACKED: &str = "\
aggressorAllianceID: 99000001
aggressorCorpID: 98000002
aggressorID: 90000002
planetID: 40009077
planetTypeID: 2016
shieldLevel: 0.995
solarSystemID: 30000142
typeID: 2233
";

pub const ORBITAL_REINFORCED: &str = "\
aggressorAllianceID: 99000001
aggressorCorpID: 98000002
aggressorID: 90000002
planetID: 40009077
planetTypeID: 2016
reinforceExitTime: 131493870000000000
solarSystemID: 30000142
typeID: 2233
";

pub const OWNERSHIP_TRANSFERRED: &str = "\
characterLinkData:
- showinfo
- 1380
- 90000001
characterName: Joe Pilot
fromCorporationLinkData:
- showinfo
- 2
- 98000002
fromCorporationName: Other Corp
solarSystemLinkData:
- showinfo
- 5
- 30000142
solarSystemName: Jita
structureLinkData:
- showinfo
- 35832
- 1021975535893
structureName: Jita - Keepstar
toCorporationLinkData:
- showinfo
- 2
- 98000001
toCorporationName: Test Corp
";

pub const ENTOSIS_CAPTURE_STARTED: &str = "\
solarSystemID: 30004759
structureTypeID: 32226
";

pub const STATION_SERVICE: &str = "\
solarSystemID: 30004759
structureTypeID: 32458
";

pub const SOV_STRUCTURE_REINFORCED: &str = "\
campaignEventType: 2
decloakTime: 131493870000000000
solarSystemID: 30004759
";

pub const SOV_COMMAND_NODES: &str = "\
campaignEventType: 1
constellationID: 20000696
solarSystemID: 30004759
";

pub const SOV_STRUCTURE_DESTROYED: &str = "\
solarSystemID: 30004759
structureTypeID: 32226
";

pub const SOV_FREEPORT: &str = "\
freeportexittime: 131493870000000000
solarSystemID: 30004759
structureTypeID: 32458
";

pub const CITADEL_FUEL_ALERT: &str = "\
listOfTypesAndQty:
- - 307
  - 4246
solarsystemID: 30000142
structureID: 1021975535893
structureShowInfoData:
- showinfo
- 35832
- 1021975535893
structureTypeID: 35832
";

pub const CITADEL_ANCHORING: &str = "\
ownerCorpLinkData:
- showinfo
- 2
- 98000001
ownerCorpName: Test Corp
solarsystemID: 30000142
structureID: 1021975535893
structureShowInfoData:
- showinfo
- 35832
- 1021975535893
structureTypeID: 35832
timeLeft: 8640000000000
vulnerableTime: 9000000000
";

pub const CITADEL_UNDER_ATTACK: &str = "\
allianceID: 99000001
armorPercentage: 100.0
charID: 90000001
corpLinkData:
- showinfo
- 2
- 98000002
corpName: Other Corp
hullPercentage: 100
shieldPercentage: 94.5
solarsystemID: 30000142
structureID: 1021975535893
structureShowInfoData:
- showinfo
- 35832
- 1021975535893
structureTypeID: 35832
";

/// Refers to the structure without a public name.
pub const CITADEL_ONLINE: &str = "\
requiresDeedTypeID: 0
solarsystemID: 30000142
structureID: 1022000000000
structureShowInfoData:
- showinfo
- 35832
- 1022000000000
structureTypeID: 35832
";

/// `timeLeft` is 28h42m.
pub const CITADEL_LOST_SHIELDS: &str = "\
solarsystemID: 30000142
structureID: 1021975535893
structureShowInfoData:
- showinfo
- 35832
- 1021975535893
structureTypeID: 35832
timeLeft: 1033200000000
timestamp: 131493870000000000
vulnerableTime: 9000000000
";

pub const CITADEL_SERVICES_OFFLINE: &str = "\
listOfServiceModuleIDs:
- 35894
- 35899
solarsystemID: 30000142
structureID: 1021975535893
structureShowInfoData:
- showinfo
- 35832
- 1021975535893
structureTypeID: 35832
";

pub const STRUCTURE_ANCHORING: &str = "\
allianceID: 99000001
corpID: 98000002
corpsPresent:
- allianceID: 99000001
  corpID: 98000002
  towers:
  - moonID: 40009082
    typeID: 16213
moonID: 40009082
solarSystemID: 30000142
typeID: 16213
";

pub const IHUB_BILL: &str = "\
billID: 1000000
corpID: 98000001
dueDate: 131493870000000000
solarSystemID: 30004759
";

pub const SOV_SELF_DESTRUCT_REQUESTED: &str = "\
charID: 90000002
destructTime: 131493870000000000
solarSystemID: 30004759
structureTypeID: 32226
";

pub const SOV_SELF_DESTRUCTED: &str = "\
solarSystemID: 30004759
structureTypeID: 32226
";

/// A minimal valid body for every routed type.
pub fn sample(kind: NotificationType) -> &'static str {
    use NotificationType::*;

    match kind {
        AllWarDeclaredMsg => WAR_DECLARED,
        SovAllClaimLostMsg | SovAllClaimAquiredMsg => SOV_CLAIM,
        TowerAlertMsg => TOWER_ALERT,
        StationConquerMsg => STATION_CONQUERED,
        OrbitalAttacked => ORBITAL_ATTACKED,
        OrbitalReinforced => ORBITAL_REINFORCED,
        OwnershipTransferred => OWNERSHIP_TRANSFERRED,
        EntosisCaptureStarted => ENTOSIS_CAPTURE_STARTED,
        StationServiceEnabled | StationServiceDisabled => STATION_SERVICE,
        SovStructureReinforced => SOV_STRUCTURE_REINFORCED,
        SovCommandNodeEventStarted => SOV_COMMAND_NODES,
        SovStructureDestroyed => SOV_STRUCTURE_DESTROYED,
        SovStationEnteredFreeport => SOV_FREEPORT,
        StructureFuelAlert => CITADEL_FUEL_ALERT,
        StructureAnchoring | StructureUnanchoring => CITADEL_ANCHORING,
        StructureUnderAttack => CITADEL_UNDER_ATTACK,
        StructureOnline => CITADEL_ONLINE,
        StructureLostShields => CITADEL_LOST_SHIELDS,
        StructureServicesOffline => CITADEL_SERVICES_OFFLINE,
        AllAnchoringMsg => STRUCTURE_ANCHORING,
        InfrastructureHubBillAboutToExpire => IHUB_BILL,
        SovStructureSelfDestructRequested => SOV_SELF_DESTRUCT_REQUESTED,
        SovStructureSelfDestructFinished => SOV_SELF_DESTRUCTED,
    }
}
