//! Trimmed-down portal pages for tests.

pub(crate) const LOGIN_PAGE: &str = r##"<!DOCTYPE html>
<html><body>
<form action="/HomeAccess/Account/LogOn" method="post">
  <input name="__RequestVerificationToken" type="hidden" value="abc123" />
  <select name="Database"><option value="10">District</option></select>
  <input name="LogOnDetails.UserName" type="text" />
  <input name="LogOnDetails.Password" type="password" />
</form>
</body></html>"##;

pub(crate) const LOGIN_PAGE_WITHOUT_TOKEN: &str = r##"<!DOCTYPE html>
<html><body><h1>Service unavailable</h1></body></html>"##;

pub(crate) const WEEK_VIEW: &str = r##"<!DOCTYPE html>
<html><body>
<div class="sg-banner-menu-element sg-menu-element-identity"><span> Jane   Doe </span></div>
<table class="sg-homeview-table">
  <thead><tr><th>Class</th><th>Average</th></tr></thead>
  <tbody>
    <tr>
      <td>
        <a class="sg-font-larger" href="#" onclick="ViewClassPopUp(4521, 1); return false;">AP Biology</a>
        <span>(BIO201A - 3)</span>
        <span>Per: 3 Room 210</span>
        <a id="staffName" href="mailto:r.smith@district.org">Smith, Robert</a>
      </td>
      <td><a class="sg-font-larger-average" href="javascript:ViewAssignmentsRCPopUp(778, 1, 'MP1');">94.2 (A)</a></td>
    </tr>
    <tr>
      <td>
        <a class="sg-font-larger" href="#" onclick="ViewClassPopUp(4600, 1)">English   III</a>
        <span>(ENG300 - 1)</span>
        <span>Per: 5</span>
        <a id="staffName" href="mailto:a.lee@district.org">Lee, Alice</a>
      </td>
      <td><a class="sg-font-larger-average" href="javascript:ViewAssignmentsRCPopUp(812, 1, 'MP1');"></a></td>
    </tr>
    <tr>
      <td>
        <a class="sg-font-larger" href="#" onclick="ViewClassPopUp(4521, 1)">AP Biology</a>
        <span>(BIO999 - 9)</span>
        <span>Per: 9</span>
      </td>
      <td><a class="sg-font-larger-average" href="#">70.0</a></td>
    </tr>
    <tr><td>Only one cell</td></tr>
    <tr>
      <td><a class="sg-font-larger" href="#">Class</a></td>
      <td></td>
    </tr>
  </tbody>
</table>
<table class="sg-homeview-table">
  <tbody>
    <tr>
      <td>
        <a class="sg-font-larger" href="#">Study Hall</a>
        <span>Per: 7</span>
      </td>
      <td><a class="sg-font-larger-average" href="#">P</a></td>
    </tr>
  </tbody>
</table>
</body></html>"##;

pub(crate) const LEGACY_CLASSES: &str = r##"<!DOCTYPE html>
<html><body>
<span id="plnMain_lblStudentName">Doe, Jane</span>
<table class="InfoTable">
  <tr><td>Course</td><td>Code</td><td>Period</td><td>Teacher</td><td>Grade</td></tr>
  <tr><td>Algebra II</td><td>MTH200</td><td>2</td><td>Nguyen</td><td>88.5</td></tr>
  <tr><td>Chemistry</td><td>SCI210</td><td>4</td></tr>
  <tr><td>Too</td><td>short</td></tr>
  <tr><td>Algebra II</td><td>MTH201</td><td>6</td><td>Other</td><td>70</td></tr>
</table>
</body></html>"##;

pub(crate) const ASSIGNMENTS: &str = r##"<!DOCTYPE html>
<html><body>
<a class="asmt_link">  AP Biology  </a>
<span class="headeravg">Student Grades 91.35%</span>
<span class="lastupdated">(Last Updated: 10/14/2026 8:02 PM)</span>
<table class="sg-asp-table" id="plnMain_rptAssigmnetsByCourse_dgCourseAssignments_0">
  <tbody>
    <tr class="sg-asp-table-header-row"><td>Date Due</td><td>Date Assigned</td><td>Assignment</td></tr>
    <tr class="sg-asp-table-data-row">
      <td>10/01/2026</td><td>09/28/2026</td><td>10/01/2026</td>
      <td><a href="#" title="Cell lab">Cell Structure Lab</a></td>
      <td>Labs</td><td>45.00</td><td>1.00</td><td>45.00</td><td>50.00</td><td>50.00</td><td>90.00%</td>
    </tr>
    <tr class="sg-asp-table-data-row">
      <td>10/05/2026</td><td>10/02/2026</td><td></td>
      <td>Quiz 2</td>
      <td>Quizzes</td><td>18</td><td>1.00</td><td>18</td><td>20</td><td>20</td><td>90%</td>
    </tr>
    <tr class="sg-asp-table-data-row">
      <td>10/09/2026</td><td>10/08/2026</td><td></td><td>Partial row</td><td>Labs</td><td>5</td><td>1</td><td>5</td><td>10</td>
    </tr>
  </tbody>
</table>
<table class="sg-asp-table" id="plnMain_rptAssigmnetsByCourse_dgCourseCategories_0">
  <tbody>
    <tr class="sg-asp-table-header-row"><td>Category</td><td>Student's Points</td><td>Maximum Points</td><td>Percent</td></tr>
    <tr class="sg-asp-table-data-row"><td>Labs</td><td>45.00</td><td>50.00</td><td>90.000%</td><td>60</td></tr>
    <tr class="sg-asp-table-data-row"><td>Quizzes</td><td>18.00</td><td>20.00</td><td>90.000%</td><td>40</td></tr>
    <tr class="sg-asp-table-data-row"><td><b>Total</b></td><td>63.00</td><td>70.00</td><td><b>90.000%</b></td><td>100</td></tr>
    <tr class="sg-asp-table-data-row"><td>Bad</td><td>1</td></tr>
  </tbody>
</table>
</body></html>"##;
