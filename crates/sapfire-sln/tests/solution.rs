//! End-to-end parsing of realistic solution files.

use sapfire_sln::{open_solution, parse_solution, SlnError};

const UWP_SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17.0.31903.59
MinimumVisualStudioVersion = 10.0.40219.1
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Sample.App", "Sample.App\Sample.App.csproj", "{6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D}"
EndProject
Project("{9A19103F-16F7-4668-BE54-9A1E7A4F7556}") = "Sample.Core", "Sample.Core\Sample.Core.csproj", "{0B1C2D3E-4F50-6172-8394-A5B6C7D8E9F0}"
	ProjectSection(ProjectDependencies) = postProject
		{6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D} = {6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D}
	EndProjectSection
EndProject
Global
	GlobalSection(SolutionConfigurationPlatforms) = preSolution
		Debug|ARM = Debug|ARM
		Debug|x64 = Debug|x64
		Debug|x86 = Debug|x86
		Release|ARM = Release|ARM
		Release|x64 = Release|x64
		Release|x86 = Release|x86
	EndGlobalSection
	GlobalSection(ProjectConfigurationPlatforms) = postSolution
		{6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D}.Debug|ARM.ActiveCfg = Debug|ARM
		{6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D}.Debug|ARM.Build.0 = Debug|ARM
		{6D3A2B4C-1E5F-4A7B-9C8D-0E1F2A3B4C5D}.Release|x64.Deploy.0 = Release|x64
	EndGlobalSection
	GlobalSection(SolutionProperties) = preSolution
		HideSolutionNode = FALSE
	EndGlobalSection
	GlobalSection(ExtensibilityGlobals) = postSolution
		SolutionGuid = {C3A5E7F9-1B2D-4F6A-8C0E-2A4C6E8A0B2D}
	EndGlobalSection
EndGlobal
"#;

const SCENARIO_A: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
VisualStudioVersion = 17.0.31903.59
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\t\tDebug|x64 = Debug|x64
\t\tRelease|x64 = Release|x64
\tEndGlobalSection
EndGlobal
";

#[test]
fn scenario_a_version_and_matrix() {
    let root = parse_solution(SCENARIO_A).unwrap();
    assert_eq!(root.visual_studio_version.as_deref(), Some("17.0.31903.59"));

    let matrix = root.configuration_platforms().unwrap();
    assert_eq!(matrix.platforms.len(), 2);
    assert_eq!(matrix.platforms["Debug"], vec!["x64"]);
    assert_eq!(matrix.platforms["Release"], vec!["x64"]);
}

#[test]
fn scenario_b_unknown_platform_is_not_supported() {
    let root = parse_solution(SCENARIO_A).unwrap();
    let matrix = root.configuration_platforms().unwrap();
    assert!(matrix.has_configuration("Debug"));
    assert!(!matrix.supports("Debug", "ARM"));
}

#[test]
fn scenario_c_single_project() {
    let text = "Project(\"{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}\") = \"App\", \"App\\App.csproj\", \"{11111111-2222-3333-4444-555555555555}\"\nEndProject\n";
    let root = parse_solution(text).unwrap();
    assert_eq!(root.projects.len(), 1);

    let project = &root.projects[0];
    assert_eq!(project.name, "App");
    assert_eq!(project.relative_path, "App\\App.csproj");
    assert_eq!(project.guid, "11111111-2222-3333-4444-555555555555");
    assert_eq!(project.type_guid, "8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942");
}

#[test]
fn scenario_d_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_solution(dir.path().join("Missing.sln")).unwrap_err();
    assert!(matches!(err, SlnError::NotFound { .. }));
}

#[test]
fn full_uwp_solution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sample.sln");
    std::fs::write(&path, UWP_SOLUTION.replace('\n', "\r\n")).unwrap();

    let root = open_solution(&path).unwrap();
    assert_eq!(root.format_version.as_deref(), Some("12.00"));
    assert_eq!(
        root.minimum_visual_studio_version.as_deref(),
        Some("10.0.40219.1")
    );

    let names: Vec<_> = root.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Sample.App", "Sample.Core"]);
    assert_eq!(
        root.project("Sample.Core").unwrap().relative_path,
        "Sample.Core\\Sample.Core.csproj"
    );

    let global = root.global.as_ref().unwrap();
    let matrix = global.solution_configuration_platforms.as_ref().unwrap();
    let configs: Vec<_> = matrix.configurations().collect();
    assert_eq!(configs, vec!["Debug", "Release"]);
    assert_eq!(matrix.platforms_for("Release").unwrap(), ["ARM", "x64", "x86"]);
    assert_eq!(
        global.solution_properties.as_ref().unwrap().get("HideSolutionNode"),
        Some("FALSE")
    );
}

#[test]
fn parsing_twice_gives_equal_trees() {
    assert_eq!(
        parse_solution(UWP_SOLUTION).unwrap(),
        parse_solution(UWP_SOLUTION).unwrap()
    );
}

#[test]
fn unterminated_global_fails() {
    let text = UWP_SOLUTION.replace("EndGlobal\n", "");
    let err = parse_solution(&text).unwrap_err();
    assert!(matches!(
        err,
        SlnError::UnterminatedBlock {
            block: "Global",
            ..
        }
    ));
}

#[test]
fn document_serializes_to_json() {
    let root = parse_solution(SCENARIO_A).unwrap();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["visual_studio_version"], "17.0.31903.59");
    assert_eq!(
        json["global"]["solution_configuration_platforms"]["platforms"]["Debug"][0],
        "x64"
    );
}
